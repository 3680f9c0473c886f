//! Verdict Evaluation Engine
//!
//! This crate evaluates bound expression trees against a runtime
//! [`Context`] that supplies variable values and performs function calls.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use verdict_ast::{Node, VariableDef};
//! use verdict_eval::{Engine, EvaluationContext};
//!
//! let age = Arc::new(VariableDef::new("age").unwrap());
//! let tree = Node::equal(Node::variable(age), 30);
//!
//! let ctx = EvaluationContext::new().with_variable("age", 30);
//! assert!(Engine::new().evaluate(&tree, &ctx).unwrap());
//! ```
//!
//! # Architecture
//!
//! - [`Engine`]: dispatches on node kind, evaluating children first
//! - [`Context`]: the application's runtime capability; [`EvaluationContext`]
//!   is a map-backed implementation
//! - `operators`: logical, comparison and membership operator implementations
//!
//! # Semantics
//!
//! - `And` and `Or` always evaluate both operands
//! - Operand kinds are checked on the actual values; the first violation
//!   aborts evaluation without a partial result
//! - Membership compares values per kind; members of another kind never match

pub mod context;
pub mod engine;
pub mod error;
pub mod operators;
pub mod value;

pub use context::{Context, ContextFn, EvaluationContext};
pub use engine::{Engine, EngineOptions};
pub use error::{EvalError, EvalResult};
pub use value::Value;
