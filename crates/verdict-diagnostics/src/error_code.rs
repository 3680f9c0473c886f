//! Verdict error codes following a structured numbering system
//!
//! Error code ranges:
//! - VRD0001-VRD0099: Construction errors (node invariants)
//! - VRD0100-VRD0199: Binding errors (resolution, static type checks)
//! - VRD0200-VRD0299: Evaluation errors (runtime)
//! - VRD0300-VRD0399: Conversion errors
//! - VRD0400-VRD0499: Namespace registration errors

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Get the error kind this code reports
    pub fn kind(&self) -> ErrorKind {
        self.info().kind
    }

    /// Check if this is a construction error (0001-0099)
    pub const fn is_construction_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a binding error (0100-0199)
    pub const fn is_binding_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is an evaluation error (0200-0299)
    pub const fn is_evaluation_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Check if this is a conversion error (0300-0399)
    pub const fn is_conversion_error(&self) -> bool {
        self.0 >= 300 && self.0 < 400
    }

    /// Check if this is a namespace registration error (0400-0499)
    pub const fn is_namespace_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VRD{:04}", self.0)
    }
}

/// The kind of failure an error code reports, independent of the phase
/// that detected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A placeholder could not be resolved in the namespace
    UnboundIdentifier,
    /// Function argument count does not match its template
    ArityMismatch,
    /// Operator applied to operand kinds it does not accept
    TypeMismatch,
    /// Relational operator on non-numbers, or membership without a set
    UnsupportedOperation,
    /// A set literal or runtime set contains a nested set
    InvalidSetMember,
    /// Malformed identifier path
    InvalidIdentifier,
    /// Function template with duplicate parameters or a mistyped default
    InvalidTemplate,
    /// Two namespace entries share a spelling
    NamespaceConflict,
    /// Evaluation nested deeper than allowed
    RecursionLimit,
    /// Failure raised by a context while resolving a variable or function
    Context,
    /// Failure raised by a converter
    Conversion,
    /// Unclassified failure
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UnboundIdentifier => "unbound identifier",
            Self::ArityMismatch => "arity mismatch",
            Self::TypeMismatch => "type mismatch",
            Self::UnsupportedOperation => "unsupported operation",
            Self::InvalidSetMember => "invalid set member",
            Self::InvalidIdentifier => "invalid identifier",
            Self::InvalidTemplate => "invalid template",
            Self::NamespaceConflict => "namespace conflict",
            Self::RecursionLimit => "recursion limit",
            Self::Context => "context error",
            Self::Conversion => "conversion error",
            Self::Other => "error",
        };
        f.write_str(name)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Kind reported by the code
    pub kind: ErrorKind,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str, kind: ErrorKind) -> Self {
        Self {
            description,
            kind,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error", ErrorKind::Other);

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    use ErrorKind::*;
    let mut map = HashMap::new();

    // Construction errors (0001-0099)
    map.insert(
        1,
        ErrorInfo::new("Nested set in set literal", InvalidSetMember).with_help(
            "Sets may only contain strings, numbers, variables, functions or operations",
        ),
    );
    map.insert(2, ErrorInfo::new("Invalid argument count", ArityMismatch));
    map.insert(3, ErrorInfo::new("Empty identifier path", InvalidIdentifier));
    map.insert(4, ErrorInfo::new("Invalid function template", InvalidTemplate));

    // Binding errors (0100-0199)
    map.insert(
        100,
        ErrorInfo::new("Unbound identifier", UnboundIdentifier).with_help(
            "Check that the identifier is registered in the namespace for this locale",
        ),
    );
    map.insert(101, ErrorInfo::new("Invalid argument count", ArityMismatch));
    map.insert(102, ErrorInfo::new("Type mismatch", TypeMismatch));
    map.insert(103, ErrorInfo::new("Unsupported operation", UnsupportedOperation));
    map.insert(104, ErrorInfo::new("Invalid argument type", TypeMismatch));

    // Evaluation errors (0200-0299)
    map.insert(200, ErrorInfo::new("Type mismatch", TypeMismatch));
    map.insert(201, ErrorInfo::new("Unsupported operation", UnsupportedOperation));
    map.insert(202, ErrorInfo::new("Nested set value", InvalidSetMember));
    map.insert(
        203,
        ErrorInfo::new("Unbound placeholder evaluated", UnboundIdentifier)
            .with_help("Bind the tree against a namespace before evaluating it"),
    );
    map.insert(204, ErrorInfo::new("Context failed", Context));
    map.insert(205, ErrorInfo::new("Recursion limit exceeded", RecursionLimit));

    // Conversion errors (0300-0399)
    map.insert(
        300,
        ErrorInfo::new("Unbound placeholder converted", UnboundIdentifier)
            .with_help("Bind the tree against a namespace before converting it"),
    );
    map.insert(301, ErrorInfo::new("Converter failed", Conversion));

    // Namespace errors (0400-0499)
    map.insert(400, ErrorInfo::new("Duplicate global name", NamespaceConflict));
    map.insert(401, ErrorInfo::new("Duplicate localized name", NamespaceConflict));

    map
});

// Construction errors
pub const VRD0001: ErrorCode = ErrorCode::new(1);
pub const VRD0002: ErrorCode = ErrorCode::new(2);
pub const VRD0003: ErrorCode = ErrorCode::new(3);
pub const VRD0004: ErrorCode = ErrorCode::new(4);

// Binding errors
pub const VRD0100: ErrorCode = ErrorCode::new(100);
pub const VRD0101: ErrorCode = ErrorCode::new(101);
pub const VRD0102: ErrorCode = ErrorCode::new(102);
pub const VRD0103: ErrorCode = ErrorCode::new(103);
pub const VRD0104: ErrorCode = ErrorCode::new(104);

// Evaluation errors
pub const VRD0200: ErrorCode = ErrorCode::new(200);
pub const VRD0201: ErrorCode = ErrorCode::new(201);
pub const VRD0202: ErrorCode = ErrorCode::new(202);
pub const VRD0203: ErrorCode = ErrorCode::new(203);
pub const VRD0204: ErrorCode = ErrorCode::new(204);
pub const VRD0205: ErrorCode = ErrorCode::new(205);

// Conversion errors
pub const VRD0300: ErrorCode = ErrorCode::new(300);
pub const VRD0301: ErrorCode = ErrorCode::new(301);

// Namespace errors
pub const VRD0400: ErrorCode = ErrorCode::new(400);
pub const VRD0401: ErrorCode = ErrorCode::new(401);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(VRD0001.to_string(), "VRD0001");
        assert_eq!(VRD0203.to_string(), "VRD0203");
    }

    #[test]
    fn test_error_code_ranges() {
        assert!(VRD0001.is_construction_error());
        assert!(VRD0100.is_binding_error());
        assert!(VRD0200.is_evaluation_error());
        assert!(VRD0301.is_conversion_error());
        assert!(VRD0400.is_namespace_error());
        assert!(!VRD0200.is_binding_error());
    }

    #[test]
    fn test_same_kind_across_phases() {
        assert_eq!(VRD0102.kind(), ErrorKind::TypeMismatch);
        assert_eq!(VRD0200.kind(), ErrorKind::TypeMismatch);
        assert_eq!(VRD0100.kind(), ErrorKind::UnboundIdentifier);
        assert_eq!(VRD0300.kind(), ErrorKind::UnboundIdentifier);
    }

    #[test]
    fn test_invalid_template_is_not_an_arity_error() {
        assert_eq!(VRD0004.kind(), ErrorKind::InvalidTemplate);
        assert_ne!(VRD0004.kind(), VRD0002.kind());
        assert_eq!(VRD0004.kind().to_string(), "invalid template");
    }

    #[test]
    fn test_unknown_code() {
        let code = ErrorCode::new(999);
        assert_eq!(code.info().description, "Unknown error");
        assert_eq!(code.kind(), ErrorKind::Other);
    }
}
