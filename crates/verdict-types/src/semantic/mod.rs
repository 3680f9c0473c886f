//! Namespaces and binding
//!
//! This module provides:
//! - Symbols and localized spellings
//! - Namespace registration and lookup
//! - Binding of placeholders to templates

mod namespace;
mod resolver;
mod symbols;

pub use namespace::*;
pub use resolver::*;
pub use symbols::*;
