/// How a [`SceneFilter`](crate::SceneFilter) treats letter case.
///
/// The default is case-sensitive: field keywords, the `or ` separator, tags
/// and text fields all have to match exactly as typed. With
/// `case_insensitive` the query is lowercased before it is compiled and scene
/// text is lowercased when compared, so `OR`, `NumGirls>=2` and `Beach` work
/// as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub case_insensitive: bool,
}

impl FilterOptions {
    pub fn case_insensitive() -> Self {
        Self {
            case_insensitive: true,
        }
    }
}
