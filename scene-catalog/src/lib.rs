//! Scene records and the evaluation of compiled `scene-syntax` queries
//! against them.
//!
//! ```
//! use scene_catalog::{FilterOptions, Scene, SceneCatalog};
//!
//! let catalog = SceneCatalog::new(
//!     "/media/library",
//!     vec![
//!         Scene { num_girls: 2, ..Scene::new("a.mp4", "2004") }.with_tags(["beach"]),
//!         Scene { num_boys: 3, ..Scene::new("b.mp4", "2010") }.with_tags(["pool"]),
//!         Scene::new("c.mp4", "2012").with_tags(["beach"]),
//!     ],
//! )
//! .unwrap();
//!
//! let found = catalog.search("beach numgirls>=2 or pool", FilterOptions::default());
//! let names: Vec<_> = found.iter().map(|scene| scene.file_name.as_str()).collect();
//! assert_eq!(names, ["a.mp4", "b.mp4"]);
//! ```

mod catalog;
mod filter;
mod options;
mod query;
mod scene;

pub use catalog::*;
pub use filter::*;
pub use options::*;
pub use scene::*;

pub use scene_syntax::{ParseWarning, duration_to_seconds};
