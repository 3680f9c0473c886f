//! Static kind inference and type checking
//!
//! A node's static kind is the kind of value it produces as far as it can
//! be known without a context: constants and operations always have one,
//! variables and functions only when their template declares it.
//!
//! The operand rules are shared with the evaluator, which applies them to
//! runtime values once variable and function results are known.

use thiserror::Error;
use verdict_ast::{BinaryOp, Node, UnaryOp, ValueKind};
use verdict_diagnostics::{ErrorBuilder, VRD0102, VRD0103, VRD0104, VerdictError};

/// Violation of an operator's operand rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperandError {
    /// Operand kind is not accepted by the operator
    #[error("Type mismatch: {op} expects {expected}, found {found}")]
    TypeMismatch {
        op: &'static str,
        expected: String,
        found: ValueKind,
    },

    /// Operator is not defined for the operand kind
    #[error("Unsupported operation: {op} is not defined for {found}")]
    UnsupportedOperation { op: &'static str, found: ValueKind },
}

/// Static type check errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeCheckError {
    /// An operation whose operands break its rules
    #[error("{source} in `{node}`")]
    Operands {
        node: String,
        #[source]
        source: OperandError,
    },

    /// A function argument of the wrong kind
    #[error("Argument '{parameter}' of '{function}' expects {expected}, found {found}")]
    ArgumentType {
        function: String,
        parameter: String,
        expected: ValueKind,
        found: ValueKind,
    },
}

/// Type check result
pub type TypeCheckResult<T> = Result<T, TypeCheckError>;

impl From<TypeCheckError> for VerdictError {
    fn from(err: TypeCheckError) -> Self {
        let message = err.to_string();
        match err {
            TypeCheckError::Operands { node, source } => {
                let code = match source {
                    OperandError::TypeMismatch { .. } => VRD0102,
                    OperandError::UnsupportedOperation { .. } => VRD0103,
                };
                ErrorBuilder::new(code, message).node(node).binding()
            }
            TypeCheckError::ArgumentType { function, .. } => {
                ErrorBuilder::new(VRD0104, message).node(function).binding()
            }
        }
    }
}

/// The kind of value a node produces, if known without a context
pub fn static_kind(node: &Node) -> Option<ValueKind> {
    match node {
        Node::Constant(c) => Some(c.kind()),
        Node::Placeholder(_) => None,
        Node::Variable(var) => var.def.kind(),
        Node::Function(call) => call.def.return_kind(),
        Node::Unary(_) | Node::Binary(_) => Some(ValueKind::Boolean),
    }
}

/// Check a unary operand kind; unknown kinds always pass
pub fn check_unary(op: UnaryOp, operand: Option<ValueKind>) -> Result<(), OperandError> {
    match op {
        UnaryOp::Not => expect_boolean(op.name(), operand),
    }
}

/// Check a pair of operand kinds against a binary operator; unknown kinds
/// always pass
pub fn check_binary(
    op: BinaryOp,
    left: Option<ValueKind>,
    right: Option<ValueKind>,
) -> Result<(), OperandError> {
    let name = op.name();
    match op {
        BinaryOp::And | BinaryOp::Or | BinaryOp::Xor => {
            expect_boolean(name, left)?;
            expect_boolean(name, right)
        }
        BinaryOp::Equal | BinaryOp::NotEqual => match (left, right) {
            (Some(l), Some(r)) if l != r => Err(OperandError::TypeMismatch {
                op: name,
                expected: format!("two {l} operands"),
                found: r,
            }),
            _ => Ok(()),
        },
        BinaryOp::LessThan
        | BinaryOp::GreaterThan
        | BinaryOp::LessOrEqual
        | BinaryOp::GreaterOrEqual => {
            for kind in [left, right].into_iter().flatten() {
                if kind != ValueKind::Number {
                    return Err(OperandError::UnsupportedOperation { op: name, found: kind });
                }
            }
            Ok(())
        }
        BinaryOp::BelongsTo => {
            if left == Some(ValueKind::Set) {
                return Err(OperandError::TypeMismatch {
                    op: name,
                    expected: "a non-set element".to_string(),
                    found: ValueKind::Set,
                });
            }
            expect_set(name, right)
        }
        BinaryOp::IsSubset => {
            expect_set(name, left)?;
            expect_set(name, right)
        }
    }
}

fn expect_boolean(op: &'static str, kind: Option<ValueKind>) -> Result<(), OperandError> {
    match kind {
        Some(found) if found != ValueKind::Boolean => Err(OperandError::TypeMismatch {
            op,
            expected: ValueKind::Boolean.to_string(),
            found,
        }),
        _ => Ok(()),
    }
}

fn expect_set(op: &'static str, kind: Option<ValueKind>) -> Result<(), OperandError> {
    match kind {
        Some(found) if found != ValueKind::Set => {
            Err(OperandError::UnsupportedOperation { op, found })
        }
        _ => Ok(()),
    }
}

/// Statically check a whole tree
///
/// Every operation whose operand kinds are known is checked against the
/// operator rules, and every function argument of known kind against the
/// declared parameter kind. Children are checked before their parent.
///
/// Recursion follows the depth of the tree; it is not bounded by the
/// engine's `max_depth`.
pub fn check(node: &Node) -> TypeCheckResult<()> {
    for child in node.children() {
        check(child)?;
    }
    check_node(node)
}

/// Check a single node against the rules for its own operands, without
/// descending into its children
pub fn check_node(node: &Node) -> TypeCheckResult<()> {
    match node {
        Node::Unary(expr) => check_unary(expr.op, static_kind(&expr.operand)).map_err(|source| {
            TypeCheckError::Operands {
                node: node.to_string(),
                source,
            }
        }),
        Node::Binary(expr) => check_binary(
            expr.op,
            static_kind(&expr.left),
            static_kind(&expr.right),
        )
        .map_err(|source| TypeCheckError::Operands {
            node: node.to_string(),
            source,
        }),
        Node::Function(call) => {
            for (param, arg) in call.def.parameters().zip(&call.args) {
                if let (Some(expected), Some(found)) = (param.kind(), static_kind(arg))
                    && expected != found
                {
                    return Err(TypeCheckError::ArgumentType {
                        function: call.path.to_string(),
                        parameter: param.name().to_string(),
                        expected,
                        found,
                    });
                }
            }
            Ok(())
        }
        Node::Constant(_) | Node::Placeholder(_) | Node::Variable(_) => Ok(()),
    }
}

/// Whether a node statically produces a boolean, or may do so at runtime
pub fn may_be_boolean(node: &Node) -> bool {
    static_kind(node).is_none_or(|kind| kind == ValueKind::Boolean)
}
