//! Verdict error types

use crate::{ErrorCode, ErrorKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Error - binding or evaluation cannot proceed
    Error,
    /// Warning - potential issue but can continue
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with the offending node and context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Rendering of the node the diagnostic is about
    pub node: Option<String>,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            node: None,
            help: None,
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            node: None,
            help: None,
        }
    }

    /// Set the offending node
    pub fn with_node(mut self, node: impl Into<String>) -> Self {
        self.node = Some(node.into());
        self
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if let Some(node) = &self.node {
            write!(f, " in `{}`", node)?;
        }
        Ok(())
    }
}

/// Main verdict error type
///
/// Variants name the phase that detected the problem; [`VerdictError::kind`]
/// names the problem itself. A malformed expression is reported by
/// [`VerdictError::Construction`] or [`VerdictError::Binding`], an expression
/// that is well-formed but inapplicable to runtime data by
/// [`VerdictError::Evaluation`].
#[derive(Debug, Clone, Error)]
pub enum VerdictError {
    /// Node construction error
    #[error("{code}: {message}")]
    Construction {
        code: ErrorCode,
        message: String,
        node: Option<String>,
    },

    /// Namespace registration error
    #[error("{code}: {message}")]
    Namespace {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// Binding error (resolution, static type checks)
    #[error("{code}: {message}")]
    Binding {
        code: ErrorCode,
        message: String,
        node: Option<String>,
        context: Option<String>,
    },

    /// Evaluation error
    #[error("{code}: {message}")]
    Evaluation {
        code: ErrorCode,
        message: String,
        node: Option<String>,
        context: Option<String>,
    },

    /// Conversion error
    #[error("{code}: {message}")]
    Conversion {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },
}

impl VerdictError {
    /// Create a construction error
    pub fn construction(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Construction {
            code,
            message: message.into(),
            node: None,
        }
    }

    /// Create a namespace registration error
    pub fn namespace(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Namespace {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Create a binding error
    pub fn binding(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Binding {
            code,
            message: message.into(),
            node: None,
            context: None,
        }
    }

    /// Create an evaluation error
    pub fn evaluation(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Evaluation {
            code,
            message: message.into(),
            node: None,
            context: None,
        }
    }

    /// Create a conversion error
    pub fn conversion(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Conversion {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Construction { code, .. } => *code,
            Self::Namespace { code, .. } => *code,
            Self::Binding { code, .. } => *code,
            Self::Evaluation { code, .. } => *code,
            Self::Conversion { code, .. } => *code,
        }
    }

    /// Get the kind of failure
    pub fn kind(&self) -> ErrorKind {
        self.code().kind()
    }

    /// Whether the expression itself is malformed, as opposed to being
    /// inapplicable to the runtime data it was evaluated against
    pub fn is_malformed_expression(&self) -> bool {
        matches!(self, Self::Construction { .. } | Self::Binding { .. })
    }

    /// Get the offending node rendering if available
    pub fn node(&self) -> Option<&str> {
        match self {
            Self::Construction { node, .. } => node.as_deref(),
            Self::Binding { node, .. } => node.as_deref(),
            Self::Evaluation { node, .. } => node.as_deref(),
            _ => None,
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, message, node, context) = match self {
            Self::Construction { code, message, node } => (code, message, node.as_ref(), None),
            Self::Namespace { code, message, context } => (code, message, None, context.as_ref()),
            Self::Binding { code, message, node, context }
            | Self::Evaluation { code, message, node, context } => {
                (code, message, node.as_ref(), context.as_ref())
            }
            Self::Conversion { code, message, context } => (code, message, None, context.as_ref()),
        };

        let mut diag = Diagnostic::error(*code, message.clone());
        if let Some(node) = node {
            diag = diag.with_node(node.clone());
        }
        match (context, code.info().help) {
            (Some(ctx), _) => diag.with_help(ctx.clone()),
            (None, Some(help)) => diag.with_help(help),
            (None, None) => diag,
        }
    }
}

/// Builder for creating verdict errors with fluent API
pub struct ErrorBuilder {
    code: ErrorCode,
    message: String,
    node: Option<String>,
    context: Option<String>,
}

impl ErrorBuilder {
    /// Create a new error builder
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            node: None,
            context: None,
        }
    }

    /// Set the offending node
    pub fn node(mut self, node: impl fmt::Display) -> Self {
        self.node = Some(node.to_string());
        self
    }

    /// Add context information
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Build a construction error
    pub fn construction(self) -> VerdictError {
        VerdictError::Construction {
            code: self.code,
            message: self.message,
            node: self.node,
        }
    }

    /// Build a namespace error
    pub fn namespace(self) -> VerdictError {
        VerdictError::Namespace {
            code: self.code,
            message: self.message,
            context: self.context,
        }
    }

    /// Build a binding error
    pub fn binding(self) -> VerdictError {
        VerdictError::Binding {
            code: self.code,
            message: self.message,
            node: self.node,
            context: self.context,
        }
    }

    /// Build an evaluation error
    pub fn evaluation(self) -> VerdictError {
        VerdictError::Evaluation {
            code: self.code,
            message: self.message,
            node: self.node,
            context: self.context,
        }
    }

    /// Build a conversion error
    pub fn conversion(self) -> VerdictError {
        VerdictError::Conversion {
            code: self.code,
            message: self.message,
            context: self.context,
        }
    }
}
