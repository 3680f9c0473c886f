//! Logical Operators
//!
//! Implements: Not, And, Or, Xor
//! Operands must be booleans. Both operands of a binary connective are
//! evaluated before it is applied.

use verdict_ast::{BinaryOp, Node, ValueKind};

use crate::engine::Engine;
use crate::error::{EvalError, EvalResult};
use crate::operators::operand_error;
use crate::value::Value;

impl Engine {
    /// Evaluate Not operator
    pub fn eval_not(&self, node: &Node, operand: &Value) -> EvalResult<bool> {
        match operand {
            Value::Boolean(b) => Ok(!b),
            other => Err(EvalError::type_mismatch(
                node,
                ValueKind::Boolean.name(),
                other.kind(),
            )),
        }
    }

    /// Evaluate And operator
    ///
    /// Truth table:
    /// | A     | B     | A and B |
    /// |-------|-------|---------|
    /// | true  | true  | true    |
    /// | true  | false | false   |
    /// | false | true  | false   |
    /// | false | false | false   |
    pub fn eval_and(&self, node: &Node, left: &Value, right: &Value) -> EvalResult<bool> {
        match (left, right) {
            (Value::Boolean(a), Value::Boolean(b)) => Ok(*a && *b),
            _ => Err(operand_error(node, BinaryOp::And, left, right)),
        }
    }

    /// Evaluate Or operator
    ///
    /// Truth table:
    /// | A     | B     | A or B  |
    /// |-------|-------|---------|
    /// | true  | true  | true    |
    /// | true  | false | true    |
    /// | false | true  | true    |
    /// | false | false | false   |
    pub fn eval_or(&self, node: &Node, left: &Value, right: &Value) -> EvalResult<bool> {
        match (left, right) {
            (Value::Boolean(a), Value::Boolean(b)) => Ok(*a || *b),
            _ => Err(operand_error(node, BinaryOp::Or, left, right)),
        }
    }

    /// Evaluate Xor (exclusive or) operator
    ///
    /// Returns true if exactly one operand is true
    pub fn eval_xor(&self, node: &Node, left: &Value, right: &Value) -> EvalResult<bool> {
        match (left, right) {
            (Value::Boolean(a), Value::Boolean(b)) => Ok(a != b),
            _ => Err(operand_error(node, BinaryOp::Xor, left, right)),
        }
    }
}
