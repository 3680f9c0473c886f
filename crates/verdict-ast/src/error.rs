//! Node construction errors

use thiserror::Error;
use verdict_diagnostics::{ErrorBuilder, VRD0001, VRD0002, VRD0003, VRD0004, VerdictError};

/// Result type for node construction
pub type NodeResult<T> = std::result::Result<T, NodeError>;

/// Errors raised while building expression nodes or operand templates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("Set member {member} is itself a set")]
    NestedSet { member: String },

    #[error("Function '{name}' expects {}, but got {found}", arity_text(.min, .max))]
    ArityMismatch {
        name: String,
        min: usize,
        max: usize,
        found: usize,
    },

    #[error("Invalid identifier path '{path}'")]
    InvalidIdentifier { path: String },

    #[error("Invalid function template '{name}': {message}")]
    InvalidTemplate { name: String, message: String },
}

/// Render an accepted argument count range
pub fn arity_text(min: &usize, max: &usize) -> String {
    let unit = |n: &usize| if *n == 1 { "argument" } else { "arguments" };
    if min == max {
        format!("{min} {}", unit(max))
    } else {
        format!("{min} to {max} {}", unit(max))
    }
}

impl From<NodeError> for VerdictError {
    fn from(err: NodeError) -> Self {
        let message = err.to_string();
        match err {
            NodeError::NestedSet { member } => {
                ErrorBuilder::new(VRD0001, message).node(member).construction()
            }
            NodeError::ArityMismatch { name, .. } => {
                ErrorBuilder::new(VRD0002, message).node(name).construction()
            }
            NodeError::InvalidIdentifier { path } => {
                ErrorBuilder::new(VRD0003, message).node(path).construction()
            }
            NodeError::InvalidTemplate { name, .. } => {
                ErrorBuilder::new(VRD0004, message).node(name).construction()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_diagnostics::ErrorKind;

    #[test]
    fn test_arity_message() {
        let err = NodeError::ArityMismatch {
            name: "days_since".into(),
            min: 1,
            max: 2,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "Function 'days_since' expects 1 to 2 arguments, but got 3"
        );
    }

    #[test]
    fn test_into_verdict_error() {
        let err: VerdictError = NodeError::NestedSet {
            member: "{1, 2}".into(),
        }
        .into();
        assert!(err.is_malformed_expression());
        assert_eq!(err.kind(), ErrorKind::InvalidSetMember);
        assert_eq!(err.node(), Some("{1, 2}"));
    }
}
