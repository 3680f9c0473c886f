//! Evaluator benchmarks using divan
//!
//! Benchmarks for binding and evaluating expression trees.

use verdict::ast::{FunctionDef, Node, Parameter, ValueKind, VariableDef};
use verdict::eval::{Engine, EvaluationContext, Value};
use verdict::types::{Namespace, NamespaceBuilder, bind};

fn main() {
    divan::main();
}

fn namespace() -> Namespace {
    NamespaceBuilder::new()
        .function(
            FunctionDef::new("len")
                .unwrap()
                .required(Parameter::typed("text", ValueKind::String))
                .returns(ValueKind::Number),
        )
        .namespace(
            NamespaceBuilder::named("user")
                .variable(VariableDef::new("age").unwrap().with_kind(ValueKind::Number))
                .variable(VariableDef::new("role").unwrap())
                .variable(VariableDef::new("name").unwrap()),
        )
        .build()
        .unwrap()
}

fn context() -> EvaluationContext {
    EvaluationContext::new()
        .with_variable("user.age", 42)
        .with_variable("user.role", "editor")
        .with_variable("user.name", "Ada")
        .with_function("len", |args: &[Value]| {
            let len = args.first().and_then(Value::as_string).map_or(0, str::len);
            Ok(Value::from(len as i64))
        })
}

fn placeholder(path: &str) -> Node {
    Node::placeholder(path).unwrap()
}

fn access_rule() -> Node {
    let roles = Node::set(["admin", "editor", "owner"].map(Node::string)).unwrap();
    Node::or(
        Node::and(
            Node::greater_or_equal(placeholder("user.age"), 18),
            Node::belongs_to(placeholder("user.role"), roles),
        ),
        Node::greater_than(
            Node::placeholder_call("len", vec![placeholder("user.name")]).unwrap(),
            10,
        ),
    )
}

/// A right-leaning chain of `depth` conjunctions
fn conjunction_chain(depth: usize) -> Node {
    (0..depth).fold(Node::equal(1, 1), |node, i| {
        Node::and(Node::less_than(i as i64, depth as i64), node)
    })
}

// === Binding Benchmarks ===

mod binding {
    use super::*;

    #[divan::bench]
    fn access_rule_global(bencher: divan::Bencher) {
        let namespace = namespace();
        let tree = access_rule();

        bencher.bench_local(|| bind(divan::black_box(&tree), &namespace, None));
    }
}

// === Evaluation Benchmarks ===

mod evaluation {
    use super::*;

    #[divan::bench]
    fn access_rule_bound(bencher: divan::Bencher) {
        let engine = Engine::new();
        let tree = bind(&access_rule(), &namespace(), None).unwrap();
        let ctx = context();

        bencher.bench_local(|| engine.evaluate(divan::black_box(&tree), &ctx));
    }

    #[divan::bench(args = [8, 64, 200])]
    fn conjunction(bencher: divan::Bencher, depth: usize) {
        let engine = Engine::new();
        let tree = conjunction_chain(depth);
        let ctx = EvaluationContext::new();

        bencher.bench_local(|| engine.evaluate(divan::black_box(&tree), &ctx));
    }

    #[divan::bench]
    fn set_membership(bencher: divan::Bencher) {
        let engine = Engine::new();
        let members = (0..100).map(|i| Node::string(format!("tag-{i}")));
        let tree = Node::belongs_to("tag-99", Node::set(members).unwrap());
        let ctx = EvaluationContext::new();

        bencher.bench_local(|| engine.evaluate(divan::black_box(&tree), &ctx));
    }
}
