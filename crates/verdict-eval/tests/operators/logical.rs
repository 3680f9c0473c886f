//! Logical Operator Tests
//!
//! Tests for: Not, And, Or, Xor

use crate::{bool_expr, ctx, engine, eval};
use rstest::rstest;
use verdict_ast::{Node, ValueKind};
use verdict_eval::EvalError;

// ============================================================================
// Not
// ============================================================================

#[rstest]
#[case(true, false)]
#[case(false, true)]
fn test_not(#[case] operand: bool, #[case] expected: bool) {
    assert_eq!(eval(&Node::not(bool_expr(operand))), expected);
}

#[rstest]
#[case(true)]
#[case(false)]
fn test_double_negation(#[case] operand: bool) {
    assert_eq!(eval(&Node::not(Node::not(bool_expr(operand)))), operand);
}

#[test]
fn test_not_rejects_number() {
    let err = engine()
        .evaluate(&Node::not(Node::number(5)), &ctx())
        .unwrap_err();
    assert!(matches!(
        err,
        EvalError::TypeMismatch {
            found: ValueKind::Number,
            ..
        }
    ));
}

// ============================================================================
// And / Or / Xor truth tables
// ============================================================================

#[rstest]
#[case(true, true, true)]
#[case(true, false, false)]
#[case(false, true, false)]
#[case(false, false, false)]
fn test_and(#[case] a: bool, #[case] b: bool, #[case] expected: bool) {
    assert_eq!(eval(&Node::and(bool_expr(a), bool_expr(b))), expected);
}

#[rstest]
#[case(true, true, true)]
#[case(true, false, true)]
#[case(false, true, true)]
#[case(false, false, false)]
fn test_or(#[case] a: bool, #[case] b: bool, #[case] expected: bool) {
    assert_eq!(eval(&Node::or(bool_expr(a), bool_expr(b))), expected);
}

#[rstest]
#[case(true, true, false)]
#[case(true, false, true)]
#[case(false, true, true)]
#[case(false, false, false)]
fn test_xor(#[case] a: bool, #[case] b: bool, #[case] expected: bool) {
    assert_eq!(eval(&Node::xor(bool_expr(a), bool_expr(b))), expected);
}

#[test]
fn test_operator_overloads_build_connectives() {
    let tree = (bool_expr(true) & bool_expr(false)) | !bool_expr(false);
    assert!(eval(&tree));
}

// ============================================================================
// Operand errors
// ============================================================================

#[test]
fn test_and_with_string_operand() {
    let tree = Node::and(bool_expr(true), "oops");
    let err = engine().evaluate(&tree, &ctx()).unwrap_err();
    assert!(matches!(
        err,
        EvalError::TypeMismatch {
            found: ValueKind::String,
            ..
        }
    ));
}

#[test]
fn test_or_evaluates_both_operands() {
    // A true left side does not hide a bad right side
    let tree = Node::or(bool_expr(true), Node::number(1));
    assert!(engine().evaluate(&tree, &ctx()).is_err());
}
