//! Membership Operator Tests
//!
//! Tests for: BelongsTo, IsSubset

use crate::{ctx, engine, eval, eval_value, set_expr};
use verdict_ast::{Node, ValueKind};
use verdict_eval::{EvalError, Value};

fn languages() -> Node {
    set_expr([
        Node::string("python"),
        Node::string("rust"),
        Node::string("go"),
    ])
}

// ============================================================================
// BelongsTo
// ============================================================================

#[test]
fn test_belongs_to() {
    assert!(eval(&Node::belongs_to("python", languages())));
    assert!(!eval(&Node::belongs_to("java", languages())));
}

#[test]
fn test_belongs_to_empty_set() {
    assert!(!eval(&Node::belongs_to("python", set_expr([]))));
}

#[test]
fn test_belongs_to_mixed_set_compares_per_kind() {
    let mixed = set_expr([Node::string("1"), Node::number(2)]);
    assert!(!eval(&Node::belongs_to(1, mixed.clone())));
    assert!(eval(&Node::belongs_to(2, mixed)));
}

#[test]
fn test_belongs_to_non_set_is_unsupported() {
    let err = engine()
        .evaluate(&Node::belongs_to("python", "python"), &ctx())
        .unwrap_err();
    assert!(matches!(
        err,
        EvalError::UnsupportedOperation {
            found: ValueKind::String,
            ..
        }
    ));
}

#[test]
fn test_set_as_element_is_mismatch() {
    let err = engine()
        .evaluate(&Node::belongs_to(languages(), languages()), &ctx())
        .unwrap_err();
    assert!(matches!(
        err,
        EvalError::TypeMismatch {
            found: ValueKind::Set,
            ..
        }
    ));
}

// ============================================================================
// IsSubset
// ============================================================================

#[test]
fn test_is_subset() {
    let small = set_expr([Node::string("rust"), Node::string("go")]);
    assert!(eval(&Node::is_subset(small.clone(), languages())));
    assert!(!eval(&Node::is_subset(languages(), small)));
}

#[test]
fn test_set_is_subset_of_itself() {
    assert!(eval(&Node::is_subset(languages(), languages())));
}

#[test]
fn test_empty_set_is_subset() {
    assert!(eval(&Node::is_subset(set_expr([]), languages())));
    assert!(eval(&Node::is_subset(set_expr([]), set_expr([]))));
}

#[test]
fn test_is_subset_of_non_set_is_unsupported() {
    let err = engine()
        .evaluate(&Node::is_subset(languages(), "rust"), &ctx())
        .unwrap_err();
    assert!(matches!(err, EvalError::UnsupportedOperation { .. }));
}

// ============================================================================
// Set constants
// ============================================================================

#[test]
fn test_set_constant_deduplicates() {
    let value = eval_value(&set_expr([
        Node::number(1),
        Node::number(1),
        Node::number(2),
    ]));
    assert_eq!(value, Value::set([Value::from(1), Value::from(2)]).unwrap());
}
