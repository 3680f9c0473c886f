//! Verdict operators

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    // Logical connectives
    /// Logical and
    And,
    /// Logical inclusive or
    Or,
    /// Logical exclusive or
    Xor,

    // Equality
    /// Equality
    Equal,
    /// Inequality
    NotEqual,

    // Relational (numbers only)
    /// Less than
    LessThan,
    /// Greater than
    GreaterThan,
    /// Less than or equal
    LessOrEqual,
    /// Greater than or equal
    GreaterOrEqual,

    // Membership
    /// Element belongs to set (left ∈ right)
    BelongsTo,
    /// Set is subset of set (left ⊂ right)
    IsSubset,
}

impl BinaryOp {
    /// All binary operators, in declaration order
    pub const ALL: [BinaryOp; 11] = [
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Equal,
        Self::NotEqual,
        Self::LessThan,
        Self::GreaterThan,
        Self::LessOrEqual,
        Self::GreaterOrEqual,
        Self::BelongsTo,
        Self::IsSubset,
    ];

    /// Check if this is a logical connective
    pub const fn is_logical(&self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Xor)
    }

    /// Check if this is an equality operator
    pub const fn is_equality(&self) -> bool {
        matches!(self, Self::Equal | Self::NotEqual)
    }

    /// Check if this is a relational (ordering) operator
    pub const fn is_relational(&self) -> bool {
        matches!(
            self,
            Self::LessThan | Self::GreaterThan | Self::LessOrEqual | Self::GreaterOrEqual
        )
    }

    /// Check if this is a membership operator
    pub const fn is_membership(&self) -> bool {
        matches!(self, Self::BelongsTo | Self::IsSubset)
    }

    /// Whether swapping the operands never changes the result
    pub const fn is_commutative(&self) -> bool {
        matches!(
            self,
            Self::And | Self::Or | Self::Xor | Self::Equal | Self::NotEqual
        )
    }

    /// Get the operator symbol
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^",
            Self::Equal => "==",
            Self::NotEqual => "≠",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LessOrEqual => "<=",
            Self::GreaterOrEqual => ">=",
            Self::BelongsTo => "∈",
            Self::IsSubset => "⊂",
        }
    }

    /// Get the operator name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::And => "And",
            Self::Or => "Or",
            Self::Xor => "Xor",
            Self::Equal => "Equal",
            Self::NotEqual => "NotEqual",
            Self::LessThan => "LessThan",
            Self::GreaterThan => "GreaterThan",
            Self::LessOrEqual => "LessOrEqual",
            Self::GreaterOrEqual => "GreaterOrEqual",
            Self::BelongsTo => "BelongsTo",
            Self::IsSubset => "IsSubset",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Logical negation
    Not,
}

impl UnaryOp {
    /// Get the operator symbol
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Not => "~",
        }
    }

    /// Get the operator name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Not => "Not",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_families_are_disjoint() {
        for op in BinaryOp::ALL {
            let families = [
                op.is_logical(),
                op.is_equality(),
                op.is_relational(),
                op.is_membership(),
            ];
            assert_eq!(families.iter().filter(|f| **f).count(), 1, "{op:?}");
        }
    }

    #[test]
    fn test_membership_is_not_commutative() {
        assert!(!BinaryOp::BelongsTo.is_commutative());
        assert!(!BinaryOp::IsSubset.is_commutative());
        assert!(BinaryOp::Xor.is_commutative());
    }
}
