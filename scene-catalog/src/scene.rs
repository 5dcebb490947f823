use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

/// One entry of the catalog: a video file, or a clip of one delimited by
/// `begin`/`end`.
///
/// Times (`begin`, `end`, `length`) are in seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Position counted from the end of the catalog; the last scene is `1`.
    #[serde(default)]
    pub id: i32,
    pub file_name: String,
    pub name: Option<String>,
    pub directory: String,
    pub thumb_file_name: Option<String>,
    pub website: Option<String>,
    /// Free text, usually a comma separated list of names.
    pub actors: Option<String>,
    /// Extra arguments for the external player.
    pub cmd_parm: Option<String>,
    #[serde(default)]
    pub tags: HashSet<String>,
    pub begin: Option<i32>,
    pub end: Option<i32>,
    pub year: Option<i32>,
    pub length: Option<i32>,
    pub num_girls: i32,
    pub num_boys: i32,
    #[serde(default)]
    pub score: i32,
    pub notes: Option<String>,
}

impl Scene {
    pub fn new(file_name: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            directory: directory.into(),
            ..Default::default()
        }
    }

    /// Adds tags, splitting on commas the way catalog files list them.
    pub fn with_tags<'a>(mut self, tags: impl IntoIterator<Item = &'a str>) -> Self {
        self.tags.extend(
            tags.into_iter()
                .flat_map(|tag| tag.split(','))
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string),
        );
        self
    }

    /// Playable length in seconds. See [`effective_duration`].
    pub fn real_length(&self) -> i64 {
        effective_duration(self)
    }

    /// The fields queries look at, with the searchable text lowercased.
    /// Fields no query reads (name, notes, thumbnail, player arguments) are
    /// left empty.
    pub fn case_folded(&self) -> Scene {
        Scene {
            id: self.id,
            file_name: self.file_name.to_lowercase(),
            directory: self.directory.to_lowercase(),
            website: self.website.as_deref().map(str::to_lowercase),
            actors: self.actors.as_deref().map(str::to_lowercase),
            tags: self.tags.iter().map(|tag| tag.to_lowercase()).collect(),
            begin: self.begin,
            end: self.end,
            year: self.year,
            length: self.length,
            num_girls: self.num_girls,
            num_boys: self.num_boys,
            score: self.score,
            ..Default::default()
        }
    }
}

/// The explicit `length` when set, otherwise `end - begin` (a missing `begin`
/// counts as the start of the file), otherwise `0`.
pub fn effective_duration(scene: &Scene) -> i64 {
    if let Some(length) = scene.length {
        return length.into();
    }
    match scene.end {
        Some(end) => i64::from(end) - i64::from(scene.begin.unwrap_or(0)),
        None => 0,
    }
}
