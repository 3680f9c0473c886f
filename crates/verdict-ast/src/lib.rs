//! Verdict expression trees
//!
//! This crate defines the nodes of a boolean expression tree: constants,
//! placeholders, bound variables and functions, and the logical, relational
//! and membership operations that combine them. It also defines the operand
//! templates ([`VariableDef`], [`FunctionDef`]) that a namespace exposes and
//! bound nodes point to.

mod constant;
mod error;
mod node;
mod operand;
mod operator;
mod types;

pub use constant::*;
pub use error::*;
pub use node::*;
pub use operand::*;
pub use operator::*;
pub use types::*;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// A dotted identifier path (e.g. `user.address.city`)
///
/// Always holds at least one segment; segments are non-empty and contain
/// neither dots nor whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentifierPath(SmallVec<[String; 2]>);

impl IdentifierPath {
    /// Create a single-segment path
    pub fn new(name: impl Into<String>) -> NodeResult<Self> {
        Self::from_segments([name.into()])
    }

    /// Parse a dotted path
    pub fn parse(dotted: &str) -> NodeResult<Self> {
        Self::from_segments(dotted.split('.'))
    }

    /// Build a path from its segments
    pub fn from_segments<I, S>(segments: I) -> NodeResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: SmallVec<[String; 2]> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() || !segments.iter().all(|s| is_valid_segment(s)) {
            return Err(NodeError::InvalidIdentifier {
                path: segments.join("."),
            });
        }
        Ok(Self(segments))
    }

    /// All segments, outermost first
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The final segment
    pub fn name(&self) -> &str {
        self.0.last().map_or("", String::as_str)
    }

    /// Every segment but the last
    pub fn namespace(&self) -> &[String] {
        &self.0[..self.0.len().saturating_sub(1)]
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path has no segments; never true once constructed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Extend the path by one segment
    pub fn child(&self, name: impl Into<String>) -> NodeResult<Self> {
        let name = name.into();
        if !is_valid_segment(&name) {
            return Err(NodeError::InvalidIdentifier {
                path: format!("{self}.{name}"),
            });
        }
        let mut segments = self.0.clone();
        segments.push(name);
        Ok(Self(segments))
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains('.') && !segment.chars().any(char::is_whitespace)
}

impl fmt::Display for IdentifierPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl std::str::FromStr for IdentifierPath {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
