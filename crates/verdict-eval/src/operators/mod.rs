//! Verdict Operator Implementations
//!
//! Operators are implemented as methods on [`Engine`](crate::Engine),
//! organized by family:
//! - Logical connectives (Not, And, Or, Xor)
//! - Equality and relational comparisons
//! - Set membership (BelongsTo, IsSubset)
//!
//! The engine checks operand kinds before dispatching here; the operators
//! still reject unexpected kinds rather than assume them.

pub mod comparison;
pub mod logical;
pub mod membership;

use verdict_ast::{BinaryOp, Node};
use verdict_types::{OperandError, check_binary};

use crate::error::EvalError;
use crate::value::Value;

/// Error for an operand pair a binary operator cannot handle
pub(crate) fn operand_error(node: &Node, op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    let err = check_binary(op, Some(left.kind()), Some(right.kind())).err();
    EvalError::operands(
        node,
        err.unwrap_or(OperandError::TypeMismatch {
            op: op.name(),
            expected: format!("operands accepted by {}", op.name()),
            found: right.kind(),
        }),
    )
}
