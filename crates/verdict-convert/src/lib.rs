//! Verdict tree conversion
//!
//! This crate provides:
//! - The [`Converter`] contract, one method per node kind
//! - [`convert`], the post-order traversal that drives a converter
//! - [`JsonConverter`], a structural JSON dump of a tree
//!
//! The traversal never interprets a converter's output, so a single tree
//! can be rendered into SQL, a search query or any other target without
//! this crate knowing about it.

pub mod converter;
pub mod error;
pub mod json;

pub use converter::{Converter, convert};
pub use error::{ConvertError, ConvertResult};
pub use json::JsonConverter;
