//! Conversion tests with a SQL `WHERE` clause converter
//!
//! The converter lives in the test: the core knows nothing about SQL.

use insta::assert_snapshot;
use rstest::rstest;
use rust_decimal::Decimal;
use std::sync::Arc;
use verdict_ast::{
    FunctionCall, FunctionDef, IdentifierPath, Node, Parameter, ValueKind, VariableDef,
    VariableRef,
};
use verdict_convert::{ConvertError, ConvertResult, Converter, convert};
use verdict_diagnostics::{ErrorKind, VerdictError};

/// Renders a tree as a SQL boolean expression
///
/// Qualified names map to `table.column`; functions map to SQL functions
/// of the same name.
struct SqlWhere;

impl SqlWhere {
    fn infix(&self, left: String, op: &str, right: String) -> ConvertResult<String> {
        Ok(format!("({left} {op} {right})"))
    }
}

impl Converter for SqlWhere {
    type Output = String;

    fn string(&mut self, value: &str) -> ConvertResult<String> {
        Ok(format!("'{}'", value.replace('\'', "''")))
    }

    fn number(&mut self, value: &Decimal) -> ConvertResult<String> {
        Ok(value.to_string())
    }

    fn set(&mut self, members: Vec<String>) -> ConvertResult<String> {
        Ok(format!("({})", members.join(", ")))
    }

    fn variable(&mut self, variable: &VariableRef) -> ConvertResult<String> {
        Ok(variable.def.qualified_name().to_string())
    }

    fn function(&mut self, call: &FunctionCall, args: Vec<String>) -> ConvertResult<String> {
        Ok(format!("{}({})", call.def.name().to_uppercase(), args.join(", ")))
    }

    fn not(&mut self, operand: String) -> ConvertResult<String> {
        Ok(format!("NOT {operand}"))
    }

    fn and(&mut self, left: String, right: String) -> ConvertResult<String> {
        self.infix(left, "AND", right)
    }

    fn or(&mut self, left: String, right: String) -> ConvertResult<String> {
        self.infix(left, "OR", right)
    }

    fn xor(&mut self, left: String, right: String) -> ConvertResult<String> {
        self.infix(left, "<>", right)
    }

    fn equal(&mut self, left: String, right: String) -> ConvertResult<String> {
        self.infix(left, "=", right)
    }

    fn not_equal(&mut self, left: String, right: String) -> ConvertResult<String> {
        self.infix(left, "<>", right)
    }

    fn less_than(&mut self, left: String, right: String) -> ConvertResult<String> {
        self.infix(left, "<", right)
    }

    fn greater_than(&mut self, left: String, right: String) -> ConvertResult<String> {
        self.infix(left, ">", right)
    }

    fn less_or_equal(&mut self, left: String, right: String) -> ConvertResult<String> {
        self.infix(left, "<=", right)
    }

    fn greater_or_equal(&mut self, left: String, right: String) -> ConvertResult<String> {
        self.infix(left, ">=", right)
    }

    fn belongs_to(&mut self, element: String, set: String) -> ConvertResult<String> {
        self.infix(element, "IN", set)
    }

    fn is_subset(&mut self, _subset: String, _superset: String) -> ConvertResult<String> {
        Err(ConvertError::failed("IsSubset has no SQL equivalent"))
    }
}

fn column(path: &str) -> Node {
    let path = IdentifierPath::parse(path).unwrap();
    let def = VariableDef::new(path.name())
        .unwrap()
        .with_qualified_name(path);
    Node::variable(Arc::new(def))
}

fn sql(node: &Node) -> String {
    convert(node, &mut SqlWhere).unwrap()
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_where_clause() {
    let tree = Node::and(
        Node::greater_or_equal(column("users.age"), 18),
        Node::belongs_to(
            column("users.country"),
            Node::set([Node::string("ES"), Node::string("PT")]).unwrap(),
        ),
    );
    assert_snapshot!(sql(&tree), @"((users.age >= 18) AND (users.country IN ('ES', 'PT')))");
}

#[test]
fn test_negation_and_quoting() {
    let tree = Node::not(Node::equal(column("users.name"), "O'Brien"));
    assert_snapshot!(sql(&tree), @"NOT (users.name = 'O''Brien')");
}

#[test]
fn test_function_with_default_argument() {
    let round = Arc::new(
        FunctionDef::new("round")
            .unwrap()
            .required(Parameter::typed("value", ValueKind::Number))
            .optional(Parameter::typed("places", ValueKind::Number), 0),
    );
    let call = Node::function(round, vec![column("orders.total")]).unwrap();
    let tree = Node::less_than(call, Decimal::new(995, 1));
    assert_snapshot!(sql(&tree), @"(ROUND(orders.total, 0) < 99.5)");
}

#[rstest]
#[case(Node::or(Node::equal(1, 1), Node::not_equal(1, 2)), "((1 = 1) OR (1 <> 2))")]
#[case(Node::xor(Node::equal(1, 1), Node::equal(2, 2)), "((1 = 1) <> (2 = 2))")]
#[case(Node::less_or_equal(1, 2), "(1 <= 2)")]
#[case(Node::greater_than(3, 2), "(3 > 2)")]
fn test_operators(#[case] tree: Node, #[case] expected: &str) {
    assert_eq!(sql(&tree), expected);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_converter_failure_propagates() {
    let tags = Node::set([Node::string("a")]).unwrap();
    let tree = Node::and(
        Node::equal(1, 1),
        Node::is_subset(tags.clone(), tags),
    );
    let err = convert(&tree, &mut SqlWhere).unwrap_err();
    assert_eq!(err, ConvertError::failed("IsSubset has no SQL equivalent"));

    let diag = VerdictError::from(err);
    assert_eq!(diag.kind(), ErrorKind::Conversion);
    assert_eq!(diag.code().to_string(), "VRD0301");
}

#[test]
fn test_unbound_tree_is_rejected() {
    let tree = Node::equal(Node::placeholder("users.age").unwrap(), 18);
    let err = convert(&tree, &mut SqlWhere).unwrap_err();
    assert_eq!(
        VerdictError::from(err).kind(),
        ErrorKind::UnboundIdentifier
    );
}

#[test]
fn test_conversion_leaves_tree_untouched() {
    let tree = Node::equal(column("users.age"), 18);
    let before = tree.clone();
    let first = sql(&tree);
    assert_eq!(sql(&tree), first);
    assert_eq!(tree, before);
}
