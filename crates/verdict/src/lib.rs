//! Boolean expression trees for Rust
//!
//! This crate ties the verdict components together:
//! - Node model and operand templates ([`ast`])
//! - Namespaces, binding and static checks ([`types`])
//! - Evaluation against runtime contexts ([`eval`])
//! - Conversion into arbitrary targets ([`convert`])
//!
//! # Example
//!
//! ```
//! use verdict::ast::{Node, ValueKind, VariableDef};
//! use verdict::eval::EvaluationContext;
//! use verdict::types::NamespaceBuilder;
//! use verdict::bind_evaluable;
//!
//! let namespace = NamespaceBuilder::new()
//!     .namespace(
//!         NamespaceBuilder::named("user")
//!             .variable(VariableDef::new("age")?.with_kind(ValueKind::Number)),
//!     )
//!     .build()?;
//!
//! let tree = Node::greater_or_equal(Node::placeholder("user.age")?, 18);
//! let adult = bind_evaluable(&tree, &namespace, None)?;
//!
//! let ctx = EvaluationContext::new().with_variable("user.age", 30);
//! assert!(adult.evaluate(&ctx)?);
//! # Ok::<(), verdict::VerdictError>(())
//! ```

mod tree;

// Re-export all public APIs from internal crates
pub use verdict_ast as ast;
pub use verdict_convert as convert;
pub use verdict_diagnostics as diagnostics;
pub use verdict_eval as eval;
pub use verdict_types as types;

// Convenience re-exports
pub use tree::{ConvertibleTree, EvaluableTree, bind_convertible, bind_evaluable};
pub use verdict_ast::Node;
pub use verdict_diagnostics::{Result, VerdictError};
