//! Evaluation errors for the verdict engine

use thiserror::Error;
use verdict_ast::ValueKind;
use verdict_diagnostics::{
    ErrorBuilder, VRD0200, VRD0201, VRD0202, VRD0203, VRD0204, VRD0205, VerdictError,
};
use verdict_types::{OperandError, TypeCheckError};

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur during evaluation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Value of the wrong kind
    #[error("Type mismatch in `{node}`: expected {expected}, found {found}")]
    TypeMismatch {
        node: String,
        expected: String,
        found: ValueKind,
    },

    /// Operator not defined for the operand kind
    #[error("Unsupported operation in `{node}`: {op} is not defined for {found}")]
    UnsupportedOperation {
        node: String,
        op: &'static str,
        found: ValueKind,
    },

    /// A set member evaluated to a set
    #[error("Set member `{member}` evaluated to a set in `{node}`")]
    NestedSet { node: String, member: String },

    /// A placeholder reached during evaluation
    #[error("Cannot evaluate unbound placeholder '{name}'")]
    Unbound { name: String },

    /// The context has no value for a variable
    #[error("Undefined variable: {name}")]
    UndefinedVariable { name: String },

    /// The context cannot call a function
    #[error("Undefined function: {name}")]
    UndefinedFunction { name: String },

    /// Failure raised by a context
    #[error("Context error in '{name}': {message}")]
    Context { name: String, message: String },

    /// Evaluation nested deeper than the configured maximum
    #[error("Maximum recursion depth of {max_depth} exceeded")]
    RecursionLimit { max_depth: usize },
}

impl EvalError {
    /// Create a type mismatch error
    pub fn type_mismatch(
        node: impl ToString,
        expected: impl Into<String>,
        found: ValueKind,
    ) -> Self {
        Self::TypeMismatch {
            node: node.to_string(),
            expected: expected.into(),
            found,
        }
    }

    /// Create an error from a broken operand rule
    pub fn operands(node: impl ToString, err: OperandError) -> Self {
        match err {
            OperandError::TypeMismatch {
                expected, found, ..
            } => Self::TypeMismatch {
                node: node.to_string(),
                expected,
                found,
            },
            OperandError::UnsupportedOperation { op, found } => Self::UnsupportedOperation {
                node: node.to_string(),
                op,
                found,
            },
        }
    }

    /// Create an undefined variable error
    pub fn undefined_variable(name: impl ToString) -> Self {
        Self::UndefinedVariable {
            name: name.to_string(),
        }
    }

    /// Create an undefined function error
    pub fn undefined_function(name: impl ToString) -> Self {
        Self::UndefinedFunction {
            name: name.to_string(),
        }
    }

    /// Create a context failure; for use by [`Context`](crate::Context)
    /// implementations
    pub fn context(name: impl ToString, message: impl Into<String>) -> Self {
        Self::Context {
            name: name.to_string(),
            message: message.into(),
        }
    }
}

impl From<TypeCheckError> for EvalError {
    fn from(err: TypeCheckError) -> Self {
        match err {
            TypeCheckError::Operands { node, source } => Self::operands(node, source),
            TypeCheckError::ArgumentType {
                function,
                parameter,
                expected,
                found,
            } => Self::type_mismatch(
                function,
                format!("{expected} for argument '{parameter}'"),
                found,
            ),
        }
    }
}

impl From<EvalError> for VerdictError {
    fn from(err: EvalError) -> Self {
        let message = err.to_string();
        match err {
            EvalError::TypeMismatch { node, .. } => {
                ErrorBuilder::new(VRD0200, message).node(node).evaluation()
            }
            EvalError::UnsupportedOperation { node, .. } => {
                ErrorBuilder::new(VRD0201, message).node(node).evaluation()
            }
            EvalError::NestedSet { node, .. } => {
                ErrorBuilder::new(VRD0202, message).node(node).evaluation()
            }
            EvalError::Unbound { name } => {
                ErrorBuilder::new(VRD0203, message).node(name).evaluation()
            }
            EvalError::UndefinedVariable { name }
            | EvalError::UndefinedFunction { name }
            | EvalError::Context { name, .. } => {
                ErrorBuilder::new(VRD0204, message).node(name).evaluation()
            }
            EvalError::RecursionLimit { .. } => {
                ErrorBuilder::new(VRD0205, message).evaluation()
            }
        }
    }
}
