use crate::{FilterOptions, Scene, SceneFilter};
use anyhow::{Result, bail};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Instant};
use tracing::info;

/// The scenes of one collection plus the settings stored alongside them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneCatalog {
    base_dir: String,
    scenes: Vec<Scene>,
    def_search: Option<String>,
    /// Tag name and description pairs, in the order they were declared.
    tags: Vec<(String, String)>,
}

impl SceneCatalog {
    /// Builds a catalog rooted at `base_dir`.
    ///
    /// Scene ids are reassigned so that the last scene gets `1`, the one
    /// before it `2`, and so on: newly appended scenes have the lowest ids.
    pub fn new(base_dir: impl Into<String>, mut scenes: Vec<Scene>) -> Result<Self> {
        let base_dir = base_dir.into();
        if base_dir.is_empty() {
            bail!("No baseDir given");
        }
        let total = scenes.len();
        for (index, scene) in scenes.iter_mut().enumerate() {
            scene.id = i32::try_from(total - index)?;
        }
        Ok(Self {
            base_dir,
            scenes,
            def_search: None,
            tags: Vec::new(),
        })
    }

    /// Query used when an empty one is submitted.
    pub fn with_default_search(mut self, query: impl Into<String>) -> Self {
        self.def_search = Some(query.into());
        self
    }

    pub fn with_tag_descriptions(mut self, tags: Vec<(String, String)>) -> Self {
        self.tags = tags;
        self
    }

    pub fn base_dir(&self) -> &str {
        &self.base_dir
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn default_search(&self) -> Option<&str> {
        self.def_search.as_deref()
    }

    pub fn tag_descriptions(&self) -> &[(String, String)] {
        &self.tags
    }

    /// Directory holding the scene's file. An absolute scene directory
    /// replaces the base directory.
    pub fn scene_directory(&self, scene: &Scene) -> PathBuf {
        let mut path = PathBuf::new();

        #[cfg(target_os = "windows")]
        let (base_dir, directory) = (
            self.base_dir.replace('/', "\\"),
            scene.directory.replace('/', "\\"),
        );
        #[cfg(not(target_os = "windows"))]
        let (base_dir, directory) = (self.base_dir.as_str(), scene.directory.as_str());

        path.push(base_dir);
        path.push(directory);
        path
    }

    /// Full path of the scene's video file.
    pub fn scene_file(&self, scene: &Scene) -> Result<PathBuf> {
        if scene.file_name.is_empty() {
            bail!("Scene {} has no file name", scene.id);
        }
        let mut path = self.scene_directory(scene);
        path.push(&scene.file_name);
        Ok(path)
    }

    /// Compiles `query` once and returns the matching scenes in catalog order.
    /// A blank query falls back to the default search, if there is one.
    pub fn search(&self, query: &str, options: FilterOptions) -> Vec<&Scene> {
        let filter = self.compile(query, options);
        self.search_with(&filter)
    }

    pub fn search_with(&self, filter: &SceneFilter) -> Vec<&Scene> {
        let search_time = Instant::now();
        let found: Vec<_> = self
            .scenes
            .iter()
            .filter(|scene| filter.matches(scene))
            .collect();
        info!(
            "Search time: {:?}, {} of {} scenes",
            search_time.elapsed(),
            found.len(),
            self.scenes.len()
        );
        found
    }

    /// Same as [`SceneCatalog::search`], evaluated on the rayon pool.
    pub fn par_search(&self, query: &str, options: FilterOptions) -> Vec<&Scene> {
        let filter = self.compile(query, options);
        let search_time = Instant::now();
        let found: Vec<_> = self
            .scenes
            .par_iter()
            .filter(|scene| filter.matches(scene))
            .collect();
        info!(
            "Parallel search time: {:?}, {} of {} scenes",
            search_time.elapsed(),
            found.len(),
            self.scenes.len()
        );
        found
    }

    fn compile(&self, query: &str, options: FilterOptions) -> SceneFilter {
        let query = match (query.trim().is_empty(), self.def_search.as_deref()) {
            (true, Some(default)) => default,
            _ => query,
        };
        SceneFilter::compile(query, options)
    }
}
