//! Membership Operators
//!
//! Implements: BelongsTo, IsSubset

use verdict_ast::{BinaryOp, Node};

use crate::engine::Engine;
use crate::error::EvalResult;
use crate::operators::operand_error;
use crate::value::Value;

impl Engine {
    /// Evaluate BelongsTo operator (`element ∈ set`)
    ///
    /// Members of a different kind than the element never match.
    pub fn eval_belongs_to(&self, node: &Node, element: &Value, set: &Value) -> EvalResult<bool> {
        match set {
            Value::Set(_) if !element.is_set() => Ok(set.contains(element)),
            _ => Err(operand_error(node, BinaryOp::BelongsTo, element, set)),
        }
    }

    /// Evaluate IsSubset operator (`subset ⊂ superset`)
    ///
    /// True iff every member of the left set matches a member of the right
    /// set; every set is a subset of itself.
    pub fn eval_is_subset(&self, node: &Node, subset: &Value, superset: &Value) -> EvalResult<bool> {
        match (subset, superset) {
            (Value::Set(members), Value::Set(_)) => {
                Ok(members.iter().all(|member| superset.contains(member)))
            }
            _ => Err(operand_error(node, BinaryOp::IsSubset, subset, superset)),
        }
    }
}
