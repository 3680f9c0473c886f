//! Comparison Operator Tests
//!
//! Tests for: Equal, NotEqual, LessThan, GreaterThan, LessOrEqual, GreaterOrEqual

use crate::{ctx, engine, eval, set_expr};
use rstest::rstest;
use rust_decimal::Decimal;
use verdict_ast::{BinaryOp, Node, ValueKind};
use verdict_eval::EvalError;

// ============================================================================
// Equality
// ============================================================================

#[test]
fn test_equal_numbers() {
    assert!(eval(&Node::equal(30, 30)));
    assert!(!eval(&Node::equal(30, 31)));
}

#[test]
fn test_equal_numbers_of_different_scale() {
    assert!(eval(&Node::equal(Decimal::new(300, 1), 30)));
}

#[test]
fn test_equal_strings() {
    assert!(eval(&Node::equal("admin", "admin")));
    assert!(eval(&Node::not_equal("admin", "Admin")));
}

#[test]
fn test_equal_sets_ignore_order() {
    let a = set_expr([Node::number(1), Node::number(2)]);
    let b = set_expr([Node::number(2), Node::number(1)]);
    assert!(eval(&Node::equal(a, b)));
}

#[test]
fn test_equal_across_kinds_is_mismatch() {
    let err = engine()
        .evaluate(&Node::equal(1, "1"), &ctx())
        .unwrap_err();
    assert!(matches!(
        err,
        EvalError::TypeMismatch {
            found: ValueKind::String,
            ..
        }
    ));
}

// ============================================================================
// Relational
// ============================================================================

#[rstest]
#[case(BinaryOp::LessThan, 1, 2, true)]
#[case(BinaryOp::LessThan, 2, 2, false)]
#[case(BinaryOp::GreaterThan, 3, 2, true)]
#[case(BinaryOp::GreaterThan, 2, 2, false)]
#[case(BinaryOp::LessOrEqual, 2, 2, true)]
#[case(BinaryOp::LessOrEqual, 3, 2, false)]
#[case(BinaryOp::GreaterOrEqual, 2, 2, true)]
#[case(BinaryOp::GreaterOrEqual, 1, 2, false)]
fn test_relational(
    #[case] op: BinaryOp,
    #[case] left: i64,
    #[case] right: i64,
    #[case] expected: bool,
) {
    assert_eq!(eval(&Node::binary(op, left, right)), expected);
}

#[test]
fn test_relational_on_strings_is_unsupported() {
    let err = engine()
        .evaluate(&Node::less_than("a", "b"), &ctx())
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
fn test_relational_on_booleans_is_unsupported() {
    let tree = Node::greater_than(Node::equal(1, 1), Node::equal(1, 2));
    let err = engine().evaluate(&tree, &ctx()).unwrap_err();
    assert!(matches!(err, EvalError::UnsupportedOperation { .. }));
}
