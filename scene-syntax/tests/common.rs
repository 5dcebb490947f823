#![allow(dead_code)]
//! Shared helpers for `scene-syntax` integration tests.

use scene_syntax::*;

pub fn parse(input: &str) -> Query {
    parse_query(input)
}

pub fn single_branch(query: &Query) -> &Conjunction {
    match query.root.branches.as_slice() {
        [only] => only,
        other => panic!("expected one branch, got: {other:?}"),
    }
}

pub fn single_atom(query: &Query) -> &Atom {
    match single_branch(query).atoms.as_slice() {
        [only] => only,
        other => panic!("expected one atom, got: {other:?}"),
    }
}

pub fn predicate_of(input: &str) -> Predicate {
    single_atom(&parse(input)).predicate.clone()
}

pub fn tag_is(atom: &Atom, expected: &str) {
    match &atom.predicate {
        Predicate::Tag(tag) => assert_eq!(tag, expected),
        other => panic!("expected Tag, got: {other:?}"),
    }
}

pub fn comparison_is(input: &str, field: NumericField, op: ComparisonOp, value: f64) {
    match predicate_of(input) {
        Predicate::Compare {
            field: f,
            op: o,
            value: v,
            ..
        } => {
            assert_eq!(f, field, "{input}");
            assert_eq!(o, op, "{input}");
            assert_eq!(v, value, "{input}");
        }
        other => panic!("expected Compare for {input}, got: {other:?}"),
    }
}

pub fn is_no_op(input: &str) {
    assert_eq!(predicate_of(input), Predicate::AlwaysTrue, "{input}");
}
