//! Evaluable and convertible trees
//!
//! Thin wrappers that pair a bound root with the operation it is meant
//! for. Both share their root, so cloning a tree is cheap and a tree can be
//! handed to many threads.

use std::sync::Arc;
use verdict_ast::Node;
use verdict_convert::{Converter, convert};
use verdict_diagnostics::{ErrorBuilder, Result, VRD0102};
use verdict_eval::{Context, Engine, EngineOptions};
use verdict_types::{Namespace, bind, may_be_boolean, static_kind};

/// A tree whose root produces a truth value
#[derive(Debug, Clone)]
pub struct EvaluableTree {
    root: Arc<Node>,
    engine: Engine,
}

impl EvaluableTree {
    /// Wrap a root that may produce a boolean
    ///
    /// A root that statically produces a number, string or set is rejected.
    pub fn new(root: Node) -> Result<Self> {
        Self::with_options(root, EngineOptions::default())
    }

    pub fn with_options(root: Node, options: EngineOptions) -> Result<Self> {
        if !may_be_boolean(&root) {
            let found = static_kind(&root).map_or("unknown", |kind| kind.name());
            return Err(ErrorBuilder::new(
                VRD0102,
                format!("Expression does not produce a truth value: found {found}"),
            )
            .node(&root)
            .binding());
        }
        Ok(Self {
            root: Arc::new(root),
            engine: Engine::with_options(options),
        })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Evaluate the tree against a context
    pub fn evaluate(&self, ctx: &dyn Context) -> Result<bool> {
        Ok(self.engine.evaluate(&self.root, ctx)?)
    }
}

/// A tree meant to be rendered by converters
#[derive(Debug, Clone)]
pub struct ConvertibleTree {
    root: Arc<Node>,
}

impl ConvertibleTree {
    pub fn new(root: Node) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Render the tree with a converter
    pub fn convert<C: Converter + ?Sized>(&self, converter: &mut C) -> Result<C::Output> {
        Ok(convert(&self.root, converter)?)
    }
}

/// Bind an unbound tree and wrap it for evaluation
pub fn bind_evaluable(
    node: &Node,
    namespace: &Namespace,
    locale: Option<&str>,
) -> Result<EvaluableTree> {
    EvaluableTree::new(bind(node, namespace, locale)?)
}

/// Bind an unbound tree and wrap it for conversion
pub fn bind_convertible(
    node: &Node,
    namespace: &Namespace,
    locale: Option<&str>,
) -> Result<ConvertibleTree> {
    Ok(ConvertibleTree::new(bind(node, namespace, locale)?))
}
