//! Operator tests, one module per operator family

mod comparison;
mod logical;
mod membership;

use verdict_ast::Node;
use verdict_eval::{Engine, EvaluationContext, Value};

// ============================================================================
// Test Helpers
// ============================================================================

pub fn engine() -> Engine {
    Engine::new()
}

pub fn ctx() -> EvaluationContext {
    EvaluationContext::new()
}

/// A tree that evaluates to the given boolean without a context
pub fn bool_expr(b: bool) -> Node {
    if b {
        Node::equal(1, 1)
    } else {
        Node::equal(1, 2)
    }
}

pub fn set_expr(members: impl IntoIterator<Item = Node>) -> Node {
    Node::set(members).unwrap()
}

pub fn eval(node: &Node) -> bool {
    engine().evaluate(node, &ctx()).unwrap()
}

pub fn eval_value(node: &Node) -> Value {
    engine().evaluate_value(node, &ctx()).unwrap()
}
