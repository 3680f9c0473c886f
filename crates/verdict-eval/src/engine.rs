//! Verdict Evaluation Engine
//!
//! This module provides the [`Engine`] struct which evaluates bound
//! expression trees against a [`Context`].

use log::trace;
use serde::{Deserialize, Serialize};
use verdict_ast::{BinaryOp, Constant, FunctionCall, Node, SetLiteral, UnaryOp, ValueKind};
use verdict_types::{check_binary, check_node, check_unary};

use crate::context::Context;
use crate::error::{EvalError, EvalResult};
use crate::value::Value;

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Deepest node nesting the engine descends into
    pub max_depth: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

/// The evaluation engine
///
/// Evaluation is a post-order traversal: children first, then the node
/// itself. The tree is only read, so one tree may be evaluated from many
/// threads against different contexts at once.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    /// Create an engine with default options
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Evaluate a tree to a truth value
    ///
    /// Fails with a type mismatch if the tree produces anything but a
    /// boolean.
    pub fn evaluate(&self, node: &Node, ctx: &dyn Context) -> EvalResult<bool> {
        match self.evaluate_value(node, ctx)? {
            Value::Boolean(b) => Ok(b),
            other => Err(EvalError::type_mismatch(
                node,
                ValueKind::Boolean.name(),
                other.kind(),
            )),
        }
    }

    /// Evaluate a tree to whatever value it produces
    ///
    /// Operands whose kinds are known without the context are checked for
    /// the whole tree before the context is consulted, so a statically
    /// invalid tree fails the same way whatever the context holds.
    pub fn evaluate_value(&self, node: &Node, ctx: &dyn Context) -> EvalResult<Value> {
        self.check_static(node, 1)?;
        self.eval(node, ctx, 1)
    }

    fn enter(&self, depth: usize) -> EvalResult<()> {
        if depth > self.options.max_depth {
            return Err(EvalError::RecursionLimit {
                max_depth: self.options.max_depth,
            });
        }
        Ok(())
    }

    /// Static operand check, children first, within the depth limit
    fn check_static(&self, node: &Node, depth: usize) -> EvalResult<()> {
        self.enter(depth)?;
        for child in node.children() {
            self.check_static(child, depth + 1)?;
        }
        Ok(check_node(node)?)
    }

    /// Main node evaluation dispatcher
    fn eval(&self, node: &Node, ctx: &dyn Context, depth: usize) -> EvalResult<Value> {
        self.enter(depth)?;

        let value = match node {
            // === Operands ===
            Node::Constant(Constant::String(s)) => Value::String(s.clone()),
            Node::Constant(Constant::Number(n)) => Value::Number(*n),
            Node::Constant(Constant::Set(set)) => self.eval_set(node, set, ctx, depth)?,
            Node::Placeholder(p) => {
                return Err(EvalError::Unbound {
                    name: p.to_string(),
                });
            }
            Node::Variable(var) => {
                let value = ctx.variable(&var.def)?;
                expect_kind(node, var.def.kind(), &value)?;
                value
            }
            Node::Function(call) => self.eval_function(node, call, ctx, depth)?,

            // === Operators ===
            Node::Unary(expr) => {
                let operand = self.eval(&expr.operand, ctx, depth + 1)?;
                check_unary(expr.op, Some(operand.kind()))
                    .map_err(|err| EvalError::operands(node, err))?;
                match expr.op {
                    UnaryOp::Not => Value::Boolean(self.eval_not(node, &operand)?),
                }
            }
            Node::Binary(expr) => {
                // Both sides are always evaluated; there is no short circuit
                let left = self.eval(&expr.left, ctx, depth + 1)?;
                let right = self.eval(&expr.right, ctx, depth + 1)?;
                Value::Boolean(self.apply_binary(node, expr.op, &left, &right)?)
            }
        };

        trace!("Evaluated `{node}` to {value}");
        Ok(value)
    }

    fn apply_binary(
        &self,
        node: &Node,
        op: BinaryOp,
        left: &Value,
        right: &Value,
    ) -> EvalResult<bool> {
        check_binary(op, Some(left.kind()), Some(right.kind()))
            .map_err(|err| EvalError::operands(node, err))?;

        match op {
            BinaryOp::And => self.eval_and(node, left, right),
            BinaryOp::Or => self.eval_or(node, left, right),
            BinaryOp::Xor => self.eval_xor(node, left, right),
            BinaryOp::Equal => Ok(self.eval_equal(left, right)),
            BinaryOp::NotEqual => Ok(!self.eval_equal(left, right)),
            BinaryOp::LessThan
            | BinaryOp::GreaterThan
            | BinaryOp::LessOrEqual
            | BinaryOp::GreaterOrEqual => self.eval_relational(node, op, left, right),
            BinaryOp::BelongsTo => self.eval_belongs_to(node, left, right),
            BinaryOp::IsSubset => self.eval_is_subset(node, left, right),
        }
    }

    fn eval_set(
        &self,
        node: &Node,
        set: &SetLiteral,
        ctx: &dyn Context,
        depth: usize,
    ) -> EvalResult<Value> {
        let mut members = Vec::with_capacity(set.len());
        for member in set {
            members.push(self.eval(member, ctx, depth + 1)?);
        }
        Value::set(members).map_err(|member| EvalError::NestedSet {
            node: node.to_string(),
            member: member.to_string(),
        })
    }

    /// Evaluate a function call
    ///
    /// Arguments are evaluated left to right before the context is called;
    /// declared parameter and return kinds are enforced on the actual values.
    fn eval_function(
        &self,
        node: &Node,
        call: &FunctionCall,
        ctx: &dyn Context,
        depth: usize,
    ) -> EvalResult<Value> {
        let mut args = Vec::with_capacity(call.args.len());
        for (param, arg) in call.def.parameters().zip(&call.args) {
            let value = self.eval(arg, ctx, depth + 1)?;
            if let Some(expected) = param.kind()
                && expected != value.kind()
            {
                return Err(EvalError::type_mismatch(
                    node,
                    format!("{expected} for argument '{}'", param.name()),
                    value.kind(),
                ));
            }
            args.push(value);
        }

        let value = ctx.call(&call.def, &args)?;
        expect_kind(node, call.def.return_kind(), &value)?;
        Ok(value)
    }
}

fn expect_kind(node: &Node, declared: Option<ValueKind>, value: &Value) -> EvalResult<()> {
    match declared {
        Some(expected) if expected != value.kind() => {
            Err(EvalError::type_mismatch(node, expected.name(), value.kind()))
        }
        _ => Ok(()),
    }
}
