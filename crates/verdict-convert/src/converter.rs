//! Tree to target conversion
//!
//! A [`Converter`] knows how to render each kind of node given the already
//! rendered children; [`convert`] walks the tree children first and feeds
//! the results upward.

use log::trace;
use rust_decimal::Decimal;
use verdict_ast::{BinaryOp, Constant, FunctionCall, Node, UnaryOp, VariableRef};

use crate::error::{ConvertError, ConvertResult};

/// Renders nodes into some target representation
///
/// Every method receives the outputs already produced for the node's
/// children. Errors returned by a method abort the conversion and reach the
/// caller unchanged.
pub trait Converter {
    /// What a converted node becomes
    type Output;

    // === Operands ===

    fn string(&mut self, value: &str) -> ConvertResult<Self::Output>;

    fn number(&mut self, value: &Decimal) -> ConvertResult<Self::Output>;

    fn set(&mut self, members: Vec<Self::Output>) -> ConvertResult<Self::Output>;

    fn variable(&mut self, variable: &VariableRef) -> ConvertResult<Self::Output>;

    /// A function call; `args` includes converted defaults for omitted
    /// optional parameters
    fn function(
        &mut self,
        call: &FunctionCall,
        args: Vec<Self::Output>,
    ) -> ConvertResult<Self::Output>;

    // === Operators ===

    fn not(&mut self, operand: Self::Output) -> ConvertResult<Self::Output>;

    fn and(&mut self, left: Self::Output, right: Self::Output) -> ConvertResult<Self::Output>;

    fn or(&mut self, left: Self::Output, right: Self::Output) -> ConvertResult<Self::Output>;

    fn xor(&mut self, left: Self::Output, right: Self::Output) -> ConvertResult<Self::Output>;

    fn equal(&mut self, left: Self::Output, right: Self::Output) -> ConvertResult<Self::Output>;

    fn not_equal(&mut self, left: Self::Output, right: Self::Output)
    -> ConvertResult<Self::Output>;

    fn less_than(&mut self, left: Self::Output, right: Self::Output)
    -> ConvertResult<Self::Output>;

    fn greater_than(
        &mut self,
        left: Self::Output,
        right: Self::Output,
    ) -> ConvertResult<Self::Output>;

    fn less_or_equal(
        &mut self,
        left: Self::Output,
        right: Self::Output,
    ) -> ConvertResult<Self::Output>;

    fn greater_or_equal(
        &mut self,
        left: Self::Output,
        right: Self::Output,
    ) -> ConvertResult<Self::Output>;

    fn belongs_to(
        &mut self,
        element: Self::Output,
        set: Self::Output,
    ) -> ConvertResult<Self::Output>;

    fn is_subset(
        &mut self,
        subset: Self::Output,
        superset: Self::Output,
    ) -> ConvertResult<Self::Output>;
}

/// Convert a bound tree with the given converter
///
/// Fails with [`ConvertError::UnboundIdentifier`] at the first placeholder.
/// The tree is only read.
///
/// Recursion follows the depth of the tree; it is not bounded by the
/// engine's `max_depth`.
pub fn convert<C: Converter + ?Sized>(node: &Node, converter: &mut C) -> ConvertResult<C::Output> {
    trace!("Converting `{node}`");
    match node {
        Node::Constant(Constant::String(s)) => converter.string(s),
        Node::Constant(Constant::Number(n)) => converter.number(n),
        Node::Constant(Constant::Set(set)) => {
            let members = set
                .iter()
                .map(|member| convert(member, converter))
                .collect::<ConvertResult<Vec<_>>>()?;
            converter.set(members)
        }
        Node::Placeholder(p) => Err(ConvertError::UnboundIdentifier {
            name: p.to_string(),
        }),
        Node::Variable(var) => converter.variable(var),
        Node::Function(call) => {
            let args = call
                .args
                .iter()
                .map(|arg| convert(arg, converter))
                .collect::<ConvertResult<Vec<_>>>()?;
            converter.function(call, args)
        }
        Node::Unary(expr) => {
            let operand = convert(&expr.operand, converter)?;
            match expr.op {
                UnaryOp::Not => converter.not(operand),
            }
        }
        Node::Binary(expr) => {
            let left = convert(&expr.left, converter)?;
            let right = convert(&expr.right, converter)?;
            match expr.op {
                BinaryOp::And => converter.and(left, right),
                BinaryOp::Or => converter.or(left, right),
                BinaryOp::Xor => converter.xor(left, right),
                BinaryOp::Equal => converter.equal(left, right),
                BinaryOp::NotEqual => converter.not_equal(left, right),
                BinaryOp::LessThan => converter.less_than(left, right),
                BinaryOp::GreaterThan => converter.greater_than(left, right),
                BinaryOp::LessOrEqual => converter.less_or_equal(left, right),
                BinaryOp::GreaterOrEqual => converter.greater_or_equal(left, right),
                BinaryOp::BelongsTo => converter.belongs_to(left, right),
                BinaryOp::IsSubset => converter.is_subset(left, right),
            }
        }
    }
}
