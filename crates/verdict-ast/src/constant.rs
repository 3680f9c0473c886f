//! Constant operands

use crate::{Node, NodeError, NodeResult, ValueKind};
use rust_decimal::Decimal;
use std::fmt;

/// A constant operand
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    /// Text constant
    String(String),
    /// Decimal number constant
    Number(Decimal),
    /// Set of operands
    Set(SetLiteral),
}

impl Constant {
    /// The kind of value this constant produces
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Number(_) => ValueKind::Number,
            Self::Set(_) => ValueKind::Set,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&SetLiteral> {
        match self {
            Self::Set(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Constant {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Constant {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Decimal> for Constant {
    fn from(n: Decimal) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Constant {
    fn from(n: i64) -> Self {
        Self::Number(Decimal::from(n))
    }
}

impl From<i32> for Constant {
    fn from(n: i32) -> Self {
        Self::Number(Decimal::from(n))
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write_quoted(f, s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Set(set) => write!(f, "{set}"),
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

/// A set literal
///
/// Members are unique under structural equality and keep the order of their
/// first occurrence. No member is itself a set constant. Two set literals
/// are equal when they hold the same members, in any order.
#[derive(Debug, Clone, Default)]
pub struct SetLiteral {
    members: Vec<Node>,
}

impl SetLiteral {
    /// Create a set literal, collapsing duplicate members
    pub fn new(members: impl IntoIterator<Item = Node>) -> NodeResult<Self> {
        let mut unique: Vec<Node> = Vec::new();
        for member in members {
            if matches!(member, Node::Constant(Constant::Set(_))) {
                return Err(NodeError::NestedSet {
                    member: member.to_string(),
                });
            }
            if !unique.contains(&member) {
                unique.push(member);
            }
        }
        Ok(Self { members: unique })
    }

    /// The empty set
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn members(&self) -> &[Node] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, node: &Node) -> bool {
        self.members.contains(node)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.members.iter()
    }
}

impl PartialEq for SetLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|m| other.contains(m))
    }
}

impl<'a> IntoIterator for &'a SetLiteral {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for SetLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{member}")?;
        }
        f.write_str("}")
    }
}
