#![allow(dead_code)]
//! Shared helpers for `scene-catalog` integration tests.

use scene_catalog::*;

pub fn scene(girls: i32, boys: i32) -> Scene {
    Scene {
        num_girls: girls,
        num_boys: boys,
        ..Scene::new("clip.mp4", "clips")
    }
}

pub fn tagged(tags: &[&str]) -> Scene {
    scene(1, 1).with_tags(tags.iter().copied())
}

pub fn matches(query: &str, scene: &Scene) -> bool {
    SceneFilter::compile(query, FilterOptions::default()).matches(scene)
}

pub fn matches_insensitive(query: &str, scene: &Scene) -> bool {
    SceneFilter::compile(query, FilterOptions::case_insensitive()).matches(scene)
}

/// Indices of the scenes matched by `query`.
pub fn matching(query: &str, scenes: &[Scene]) -> Vec<usize> {
    let filter = SceneFilter::compile(query, FilterOptions::default());
    scenes
        .iter()
        .enumerate()
        .filter(|(_, scene)| filter.matches(scene))
        .map(|(index, _)| index)
        .collect()
}

/// A small library in the shape catalog files are exported as.
pub fn library() -> Vec<Scene> {
    serde_json::from_str(
        r#"[
            {
                "file_name": "sunset_beach.mp4",
                "name": "Sunset",
                "directory": "2004/summer",
                "website": "shore.example",
                "actors": "Jane Doe, Mia Roe",
                "tags": ["beach", "outdoor", "action-packed"],
                "year": 2004,
                "length": 1800,
                "num_girls": 2,
                "num_boys": 0,
                "score": 4
            },
            {
                "file_name": "pool_party.mkv",
                "directory": "2010/party",
                "actors": "John Roe",
                "tags": ["pool", "Party"],
                "year": 2010,
                "begin": 600,
                "end": 1500,
                "num_girls": 0,
                "num_boys": 3,
                "score": 2
            },
            {
                "file_name": "archive_17.avi",
                "directory": "/mnt/archive",
                "tags": ["vintage", "indoor"],
                "num_girls": 1,
                "num_boys": 1
            }
        ]"#,
    )
    .expect("valid fixture")
}
