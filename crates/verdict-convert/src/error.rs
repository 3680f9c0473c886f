//! Conversion errors

use thiserror::Error;
use verdict_diagnostics::{ErrorBuilder, VRD0300, VRD0301, VerdictError};

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur during conversion
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A placeholder reached during conversion
    #[error("Cannot convert unbound placeholder '{name}'")]
    UnboundIdentifier { name: String },

    /// Failure raised by a converter
    #[error("Conversion failed: {message}")]
    Failed { message: String },
}

impl ConvertError {
    /// Create a converter failure; for use by [`Converter`](crate::Converter)
    /// implementations
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

impl From<ConvertError> for VerdictError {
    fn from(err: ConvertError) -> Self {
        let message = err.to_string();
        match err {
            ConvertError::UnboundIdentifier { name } => ErrorBuilder::new(VRD0300, message)
                .context(format!("placeholder '{name}' must be bound before conversion"))
                .conversion(),
            ConvertError::Failed { .. } => ErrorBuilder::new(VRD0301, message).conversion(),
        }
    }
}
