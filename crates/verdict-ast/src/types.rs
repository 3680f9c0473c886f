//! Value kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of value an operand produces
///
/// String, Number and Set are the constant kinds; Boolean is produced by
/// operations (and by variables or functions that yield truth values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Boolean,
    Number,
    String,
    Set,
}

impl ValueKind {
    /// Get the kind name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::String => "String",
            Self::Set => "Set",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
