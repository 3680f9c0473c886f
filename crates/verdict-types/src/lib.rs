//! Verdict operand type system and binding
//!
//! This crate provides:
//! - Static kind inference and per-operator type checks
//! - Namespaces of variable and function templates with localized names
//! - Binding of placeholders against a namespace

pub mod inference;
pub mod semantic;

pub use inference::*;
pub use semantic::*;
