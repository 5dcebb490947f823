//! Letter case is a configuration choice: sensitive unless asked otherwise.

mod common;
use common::*;
use scene_catalog::*;

#[test]
fn default_is_case_sensitive() {
    assert_eq!(FilterOptions::default(), FilterOptions { case_insensitive: false });

    let party = tagged(&["Party"]);
    assert!(matches("Party", &party));
    assert!(!matches("party", &party));
    assert!(!matches("^part", &party));
}

#[test]
fn keywords_are_case_sensitive_by_default() {
    let scenes = [scene(2, 0), scene(0, 0)];
    // `NumGirls>=2` is an unknown field and filters nothing.
    assert!(matches("NumGirls>=2", &scenes[1]));
    // `OR` is just a tag that no scene carries.
    assert!(!matches("numgirls>=2 OR numboys>=2", &scenes[0]));
}

#[test]
fn insensitive_mode_folds_tags() {
    let party = tagged(&["Party"]);
    assert!(matches_insensitive("party", &party));
    assert!(matches_insensitive("PARTY", &party));
    assert!(matches_insensitive("^ART", &party));
    assert!(!matches_insensitive("parties", &party));
}

#[test]
fn insensitive_mode_folds_keywords() {
    let girls = scene(2, 0);
    let boys = scene(0, 3);
    let query = "NumGirls>=2 OR NUMBOYS>=2";
    assert!(matches_insensitive(query, &girls));
    assert!(matches_insensitive(query, &boys));
    assert!(!matches_insensitive(query, &scene(0, 0)));
}

#[test]
fn insensitive_mode_folds_text_fields() {
    let scenes = library();
    let filter = SceneFilter::compile("ACTOR:jane FILE:SUMMER", FilterOptions::case_insensitive());
    assert!(filter.matches(&scenes[0]));
    assert!(!filter.matches(&scenes[1]));
    assert_eq!(filter.to_string(), "actor:jane file:summer");
}

#[test]
fn options_are_kept_across_reparses() {
    let mut filter = SceneFilter::new(FilterOptions::case_insensitive());
    filter.parse("BEACH");
    assert!(filter.matches(&tagged(&["beach"])));
    filter.parse("Pool");
    assert!(filter.matches(&tagged(&["POOL"])));
    assert!(filter.options().case_insensitive);
}
