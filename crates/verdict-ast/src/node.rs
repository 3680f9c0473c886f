//! Expression tree nodes

use crate::{
    BinaryOp, Constant, FunctionDef, IdentifierPath, NodeResult, SetLiteral, UnaryOp, VariableDef,
};
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// A node of a boolean expression tree
///
/// Nodes are immutable; children are shared behind `Arc`, so cloning a node
/// is cheap and a tree can be evaluated from many threads at once.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// String, number or set constant
    Constant(Constant),
    /// Unresolved identifier (must be bound before use)
    Placeholder(Placeholder),
    /// Variable bound to a template
    Variable(VariableRef),
    /// Function call bound to a template
    Function(FunctionCall),
    /// Unary operation
    Unary(UnaryExpr),
    /// Binary operation
    Binary(BinaryExpr),
}

/// An identifier not yet resolved against a namespace
///
/// Without arguments it stands for a variable; with an argument list
/// (possibly empty) it stands for a function call.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    /// Dotted name as written
    pub name: IdentifierPath,
    /// Namespace segments the name was written under
    pub namespace: SmallVec<[String; 2]>,
    /// Call arguments, if this is a function placeholder
    pub arguments: Option<Vec<Node>>,
}

impl Placeholder {
    pub fn new(name: IdentifierPath) -> Self {
        Self {
            name,
            namespace: SmallVec::new(),
            arguments: None,
        }
    }

    /// Prefix the name with namespace segments
    pub fn in_namespace<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.namespace = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Turn the placeholder into a function call placeholder
    pub fn with_arguments(mut self, arguments: Vec<Node>) -> Self {
        self.arguments = Some(arguments);
        self
    }

    /// Namespace segments followed by the name segments
    pub fn full_path(&self) -> Vec<&str> {
        self.namespace
            .iter()
            .chain(self.name.segments())
            .map(String::as_str)
            .collect()
    }

    pub fn is_function(&self) -> bool {
        self.arguments.is_some()
    }
}

/// A variable bound to its template
#[derive(Debug, Clone, PartialEq)]
pub struct VariableRef {
    /// Path the variable was bound from
    pub path: IdentifierPath,
    pub def: Arc<VariableDef>,
}

/// A function call bound to its template
///
/// `args` always has one entry per template parameter; omitted optional
/// arguments are filled with their defaults at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// Path the function was bound from
    pub path: IdentifierPath,
    pub def: Arc<FunctionDef>,
    pub args: Vec<Arc<Node>>,
}

/// Unary operation
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Arc<Node>,
}

/// Binary operation
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: Arc<Node>,
    pub right: Arc<Node>,
}

impl Node {
    // ========================================================================
    // Operands
    // ========================================================================

    pub fn string(value: impl Into<String>) -> Self {
        Self::Constant(Constant::String(value.into()))
    }

    pub fn number(value: impl Into<Decimal>) -> Self {
        Self::Constant(Constant::Number(value.into()))
    }

    /// Set constant; fails if a member is itself a set
    pub fn set(members: impl IntoIterator<Item = Node>) -> NodeResult<Self> {
        Ok(Self::Constant(Constant::Set(SetLiteral::new(members)?)))
    }

    /// Variable placeholder from a dotted path
    pub fn placeholder(path: &str) -> NodeResult<Self> {
        Ok(Self::Placeholder(Placeholder::new(IdentifierPath::parse(
            path,
        )?)))
    }

    /// Function placeholder from a dotted path and its arguments
    pub fn placeholder_call(path: &str, arguments: Vec<Node>) -> NodeResult<Self> {
        Ok(Self::Placeholder(
            Placeholder::new(IdentifierPath::parse(path)?).with_arguments(arguments),
        ))
    }

    /// Variable referenced by its qualified name
    pub fn variable(def: Arc<VariableDef>) -> Self {
        Self::Variable(VariableRef {
            path: def.qualified_name().clone(),
            def,
        })
    }

    /// Variable bound from an arbitrary (possibly localized) path
    pub fn bound_variable(path: IdentifierPath, def: Arc<VariableDef>) -> Self {
        Self::Variable(VariableRef { path, def })
    }

    /// Function call referenced by its qualified name
    pub fn function(def: Arc<FunctionDef>, args: Vec<Node>) -> NodeResult<Self> {
        let path = def.qualified_name().clone();
        Self::bound_function(path, def, args)
    }

    /// Function call bound from an arbitrary (possibly localized) path
    ///
    /// Fails with an arity mismatch if the argument count is outside the
    /// template's range.
    pub fn bound_function(
        path: IdentifierPath,
        def: Arc<FunctionDef>,
        args: Vec<Node>,
    ) -> NodeResult<Self> {
        Self::bound_function_shared(path, def, args.into_iter().map(Arc::new).collect())
    }

    /// Like [`Node::bound_function`], for arguments that are already shared
    pub fn bound_function_shared(
        path: IdentifierPath,
        def: Arc<FunctionDef>,
        mut args: Vec<Arc<Node>>,
    ) -> NodeResult<Self> {
        def.check_arity(args.len())?;
        let (min, _) = def.arity();
        let omitted = def.defaults().skip(args.len() - min);
        args.extend(omitted.map(|default| Arc::new(Node::Constant(default.clone()))));
        Ok(Self::Function(FunctionCall { path, def, args }))
    }

    // ========================================================================
    // Operators
    // ========================================================================

    pub fn unary(op: UnaryOp, operand: impl Into<Node>) -> Self {
        Self::Unary(UnaryExpr {
            op,
            operand: Arc::new(operand.into()),
        })
    }

    pub fn binary(op: BinaryOp, left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Self::Binary(BinaryExpr {
            op,
            left: Arc::new(left.into()),
            right: Arc::new(right.into()),
        })
    }

    pub fn not(operand: impl Into<Node>) -> Self {
        Self::unary(UnaryOp::Not, operand)
    }

    pub fn and(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Self::binary(BinaryOp::And, left, right)
    }

    pub fn or(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Self::binary(BinaryOp::Or, left, right)
    }

    pub fn xor(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Self::binary(BinaryOp::Xor, left, right)
    }

    pub fn equal(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Self::binary(BinaryOp::Equal, left, right)
    }

    pub fn not_equal(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Self::binary(BinaryOp::NotEqual, left, right)
    }

    pub fn less_than(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Self::binary(BinaryOp::LessThan, left, right)
    }

    pub fn greater_than(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Self::binary(BinaryOp::GreaterThan, left, right)
    }

    pub fn less_or_equal(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Self::binary(BinaryOp::LessOrEqual, left, right)
    }

    pub fn greater_or_equal(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Self::binary(BinaryOp::GreaterOrEqual, left, right)
    }

    /// `element ∈ set`
    pub fn belongs_to(element: impl Into<Node>, set: impl Into<Node>) -> Self {
        Self::binary(BinaryOp::BelongsTo, element, set)
    }

    /// `subset ⊂ superset`
    pub fn is_subset(subset: impl Into<Node>, superset: impl Into<Node>) -> Self {
        Self::binary(BinaryOp::IsSubset, subset, superset)
    }

    // ========================================================================
    // Classification
    // ========================================================================

    /// Whether the node is an operand (constant, placeholder, variable or function)
    pub fn is_operand(&self) -> bool {
        !self.is_operator()
    }

    /// Whether the node is a unary or binary operation
    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Unary(_) | Self::Binary(_))
    }

    /// Whether the node has no child nodes
    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    pub fn is_branch(&self) -> bool {
        !self.is_leaf()
    }

    /// Direct children, in evaluation order
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Self::Constant(Constant::Set(set)) => set.iter().collect(),
            Self::Constant(_) | Self::Variable(_) => Vec::new(),
            Self::Placeholder(p) => p.arguments.iter().flatten().collect(),
            Self::Function(call) => call.args.iter().map(Arc::as_ref).collect(),
            Self::Unary(expr) => vec![expr.operand.as_ref()],
            Self::Binary(expr) => vec![expr.left.as_ref(), expr.right.as_ref()],
        }
    }

    /// Whether no placeholder is reachable from this node
    pub fn is_bound(&self) -> bool {
        !matches!(self, Self::Placeholder(_)) && self.children().iter().all(|c| c.is_bound())
    }

    /// Every placeholder reachable from this node, in pre-order
    pub fn placeholders(&self) -> Vec<&Placeholder> {
        let mut found = Vec::new();
        self.collect_placeholders(&mut found);
        found
    }

    fn collect_placeholders<'a>(&'a self, found: &mut Vec<&'a Placeholder>) {
        if let Self::Placeholder(p) = self {
            found.push(p);
        }
        for child in self.children() {
            child.collect_placeholders(found);
        }
    }

    pub fn as_constant(&self) -> Option<&Constant> {
        match self {
            Self::Constant(c) => Some(c),
            _ => None,
        }
    }

    /// Precedence used when rendering; higher binds tighter
    fn precedence(&self) -> u8 {
        match self {
            Self::Binary(expr) if expr.op.is_logical() => match expr.op {
                BinaryOp::Or => 1,
                BinaryOp::Xor => 2,
                _ => 3,
            },
            Self::Binary(_) => 4,
            _ => 5,
        }
    }

    fn fmt_child(&self, child: &Node, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if child.precedence() <= self.precedence() && child.is_operator() {
            write!(f, "({child})")
        } else {
            write!(f, "{child}")
        }
    }
}

fn fmt_arguments<'a>(
    f: &mut fmt::Formatter<'_>,
    args: impl Iterator<Item = &'a Node>,
) -> fmt::Result {
    f.write_str("(")?;
    for (i, arg) in args.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{arg}")?;
    }
    f.write_str(")")
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path().join("."))?;
        match &self.arguments {
            Some(args) => fmt_arguments(f, args.iter()),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(c) => write!(f, "{c}"),
            Self::Placeholder(p) => write!(f, "{p}"),
            Self::Variable(var) => write!(f, "{}", var.path),
            Self::Function(call) => {
                write!(f, "{}", call.path)?;
                fmt_arguments(f, call.args.iter().map(Arc::as_ref))
            }
            Self::Unary(expr) => {
                write!(f, "{} ", expr.op)?;
                self.fmt_child(&expr.operand, f)
            }
            Self::Binary(expr) => {
                self.fmt_child(&expr.left, f)?;
                write!(f, " {} ", expr.op)?;
                self.fmt_child(&expr.right, f)
            }
        }
    }
}

// ============================================================================
// Conversions and composition
// ============================================================================

impl From<Constant> for Node {
    fn from(c: Constant) -> Self {
        Self::Constant(c)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::string(s)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::string(s)
    }
}

impl From<Decimal> for Node {
    fn from(n: Decimal) -> Self {
        Self::number(n)
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Self::number(n)
    }
}

impl From<i32> for Node {
    fn from(n: i32) -> Self {
        Self::number(n)
    }
}

impl std::ops::BitAnd for Node {
    type Output = Node;

    fn bitand(self, rhs: Node) -> Node {
        Node::and(self, rhs)
    }
}

impl std::ops::BitOr for Node {
    type Output = Node;

    fn bitor(self, rhs: Node) -> Node {
        Node::or(self, rhs)
    }
}

impl std::ops::BitXor for Node {
    type Output = Node;

    fn bitxor(self, rhs: Node) -> Node {
        Node::xor(self, rhs)
    }
}

impl std::ops::Not for Node {
    type Output = Node;

    fn not(self) -> Node {
        Node::unary(UnaryOp::Not, self)
    }
}
