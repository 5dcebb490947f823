//! Malformed input never fails to parse; it degrades and leaves a warning.

mod common;
use common::*;
use scene_syntax::*;

#[test]
fn missing_close_paren_truncates_the_query() {
    let query = parse("numgirls>=2 or (numboys>=2");
    let branches = &query.root.branches;
    assert_eq!(branches.len(), 2);
    assert_eq!(branches[0].atoms.len(), 1);
    assert!(branches[1].is_empty(), "unterminated group is dropped");

    let [warning] = query.warnings.as_slice() else {
        panic!("expected one warning, got: {:?}", query.warnings);
    };
    assert_eq!(warning.position, 15);
    assert!(warning.message.contains("missing ')'"));
    assert!(warning.to_string().ends_with("(at byte 15)"));
}

#[test]
fn words_before_the_broken_group_survive() {
    let query = parse("beach pool (sauna or night");
    let conjunction = single_branch(&query);
    assert_eq!(conjunction.atoms.len(), 2);
    assert!(conjunction.groups.is_empty());
}

#[test]
fn complete_groups_before_the_broken_one_survive() {
    let query = parse("(beach) !(pool) (sauna");
    let conjunction = single_branch(&query);
    assert_eq!(conjunction.groups.len(), 2);
    assert_eq!(query.warnings.len(), 1);
}

#[test]
fn lone_open_paren() {
    let query = parse("(");
    assert!(single_branch(&query).is_empty());
    assert_eq!(query.warnings.len(), 1);
}

#[test]
fn unmatched_close_paren_keeps_the_prefix() {
    let query = parse("beach or pool) sauna");
    assert_eq!(query.root.branches.len(), 2);
    assert_eq!(query.root.branches[1].atoms.len(), 1);
    assert_eq!(query.warnings.len(), 1);
    assert!(query.warnings[0].message.contains("unexpected ')'"));
}

#[test]
fn empty_group_is_accepted() {
    let query = parse("() beach");
    let conjunction = single_branch(&query);
    assert_eq!(conjunction.groups.len(), 1);
    assert!(conjunction.groups[0].branches[0].is_empty());
    assert!(query.warnings.is_empty());
}

#[test]
fn dangling_bang_is_kept_as_negated_no_op() {
    let query = parse("!");
    let atom = single_atom(&query);
    assert!(atom.negated);
    assert_eq!(atom.predicate, Predicate::AlwaysTrue);
}

#[test]
fn warnings_are_logged() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
    let query = parse("((beach");
    assert_eq!(query.warnings.len(), 1);
}
