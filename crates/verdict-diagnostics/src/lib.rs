//! Verdict diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the
//! verdict crates: error codes, the phase-tagged [`VerdictError`] and
//! diagnostic reporting.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for verdict operations
pub type Result<T> = std::result::Result<T, VerdictError>;
