use crate::{FilterOptions, Scene};
use scene_syntax::{Disjunction, ParseWarning, parse_query};
use std::fmt;
use tracing::debug;

/// A compiled query that can be applied to any number of scenes.
///
/// ```
/// use scene_catalog::{Scene, SceneFilter};
///
/// let mut filter = SceneFilter::default();
/// filter.parse("beach numgirls>=2");
///
/// let scene = Scene { num_girls: 2, ..Scene::new("a.mp4", "clips") }.with_tags(["beach"]);
/// assert!(filter.matches(&scene));
/// ```
///
/// Recompiling replaces the whole tree; nothing from an earlier query
/// survives a call to [`SceneFilter::parse`].
#[derive(Debug, Clone)]
pub struct SceneFilter {
    pub(crate) root: Disjunction,
    pub(crate) options: FilterOptions,
    warnings: Vec<ParseWarning>,
}

impl Default for SceneFilter {
    fn default() -> Self {
        Self::new(FilterOptions::default())
    }
}

impl SceneFilter {
    /// A filter holding the empty query, which matches every scene.
    pub fn new(options: FilterOptions) -> Self {
        let empty = parse_query("");
        Self {
            root: empty.root,
            options,
            warnings: empty.warnings,
        }
    }

    /// Creates a filter and compiles `query` into it.
    pub fn compile(query: &str, options: FilterOptions) -> Self {
        let mut filter = Self::new(options);
        filter.parse(query);
        filter
    }

    /// Compiles `query`, discarding whatever was compiled before. Never
    /// fails: problems in the query are available from
    /// [`SceneFilter::warnings`] afterwards.
    pub fn parse(&mut self, query: &str) {
        let query = query.trim();
        let parsed = if self.options.case_insensitive {
            parse_query(&query.to_lowercase())
        } else {
            parse_query(query)
        };
        debug!(
            compiled = %parsed,
            warnings = parsed.warnings.len(),
            "Compiled scene filter"
        );
        self.root = parsed.root;
        self.warnings = parsed.warnings;
    }

    /// In case-insensitive mode the scene's text is lowercased once here,
    /// not once per predicate.
    pub fn matches(&self, scene: &Scene) -> bool {
        if self.options.case_insensitive {
            self.evaluate_disjunction(&self.root, &scene.case_folded())
        } else {
            self.evaluate_disjunction(&self.root, scene)
        }
    }

    /// Problems found by the last [`SceneFilter::parse`]. Positions refer to
    /// the trimmed (and, when case-insensitive, lowercased) query.
    ///
    /// A missing `)` is reported once per query, at the innermost group
    /// left open, however many nested groups it leaves unclosed.
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    pub fn options(&self) -> FilterOptions {
        self.options
    }

    pub fn root(&self) -> &Disjunction {
        &self.root
    }
}

impl fmt::Display for SceneFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}
