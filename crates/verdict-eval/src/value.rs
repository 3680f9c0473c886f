//! Verdict runtime values

use rust_decimal::Decimal;
use std::fmt;
use verdict_ast::ValueKind;

/// Runtime value produced by evaluating a node
#[derive(Debug, Clone)]
pub enum Value {
    /// Boolean value
    Boolean(bool),
    /// Decimal number
    Number(Decimal),
    /// Text
    String(String),
    /// Set of non-set values, unique, in first-occurrence order
    Set(Vec<Value>),
}

impl Value {
    pub fn boolean(b: bool) -> Self {
        Self::Boolean(b)
    }

    pub fn number(n: impl Into<Decimal>) -> Self {
        Self::Number(n.into())
    }

    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// Build a set, dropping duplicates
    ///
    /// Returns the offending member if one is itself a set.
    pub fn set(members: impl IntoIterator<Item = Value>) -> Result<Self, Value> {
        let mut unique: Vec<Value> = Vec::new();
        for member in members {
            if member.is_set() {
                return Err(member);
            }
            if !unique.contains(&member) {
                unique.push(member);
            }
        }
        Ok(Self::Set(unique))
    }

    /// The kind of this value
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Set(_) => ValueKind::Set,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&[Value]> {
        match self {
            Self::Set(members) => Some(members),
            _ => None,
        }
    }

    /// Whether a set value holds an equal member; false for non-sets
    pub fn contains(&self, value: &Value) -> bool {
        self.as_set().is_some_and(|members| members.contains(value))
    }
}

/// Per-kind equality: values of different kinds are never equal, and sets
/// are equal when they hold the same members in any order.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Set(a), Self::Set(b)) => {
                a.len() == b.len() && a.iter().all(|member| b.contains(member))
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Set(members) => {
                f.write_str("{")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{member}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<Decimal> for Value {
    fn from(n: Decimal) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(Decimal::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(Decimal::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
