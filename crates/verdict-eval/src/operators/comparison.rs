//! Comparison Operators
//!
//! Implements: Equal, NotEqual, LessThan, GreaterThan, LessOrEqual,
//! GreaterOrEqual. Relational operators are only defined for numbers.

use verdict_ast::{BinaryOp, Node};

use crate::engine::Engine;
use crate::error::EvalResult;
use crate::operators::operand_error;
use crate::value::Value;

impl Engine {
    /// Evaluate Equal operator
    ///
    /// Values of different kinds are never equal; sets are equal when they
    /// hold the same members.
    pub fn eval_equal(&self, left: &Value, right: &Value) -> bool {
        left == right
    }

    /// Evaluate a relational operator on two numbers
    pub fn eval_relational(
        &self,
        node: &Node,
        op: BinaryOp,
        left: &Value,
        right: &Value,
    ) -> EvalResult<bool> {
        let (Value::Number(a), Value::Number(b)) = (left, right) else {
            return Err(operand_error(node, op, left, right));
        };
        Ok(match op {
            BinaryOp::LessThan => a < b,
            BinaryOp::GreaterThan => a > b,
            BinaryOp::LessOrEqual => a <= b,
            BinaryOp::GreaterOrEqual => a >= b,
            _ => return Err(operand_error(node, op, left, right)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;
    use rust_decimal::Decimal;

    #[test]
    fn test_decimal_comparison_ignores_scale() {
        let engine = Engine::new();
        let node = Node::less_or_equal(1, 1);
        let a = Value::from(Decimal::new(2950, 2));
        let b = Value::from(Decimal::new(295, 1));
        assert_eq!(
            engine.eval_relational(&node, BinaryOp::LessOrEqual, &a, &b),
            Ok(true)
        );
        assert!(engine.eval_equal(&a, &b));
    }

    #[test]
    fn test_relational_rejects_strings() {
        let node = Node::less_than("a", "b");
        let err = Engine::new()
            .eval_relational(&node, BinaryOp::LessThan, &Value::from("a"), &Value::from("b"))
            .unwrap_err();
        assert!(matches!(err, EvalError::UnsupportedOperation { .. }));
    }
}
