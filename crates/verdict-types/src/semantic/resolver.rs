//! Placeholder binding
//!
//! Binding rewrites every placeholder in a tree into a variable or function
//! node pointing at the template the namespace registers under that path,
//! then statically checks the result. The input tree is never modified;
//! subtrees without placeholders are shared with the output.

use log::{debug, trace};
use std::sync::Arc;
use thiserror::Error;
use verdict_ast::{
    BinaryExpr, Constant, FunctionCall, IdentifierPath, Node, NodeError, Placeholder, SetLiteral,
    UnaryExpr, arity_text,
};
use verdict_diagnostics::{ErrorBuilder, VRD0100, VRD0101, VerdictError};

use super::namespace::{Namespace, level_name};
use super::symbols::Symbol;
use crate::inference::{TypeCheckError, check};

/// Binding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// A path segment matches nothing in the namespace
    #[error("Cannot resolve '{path}': no {what} called '{segment}' in {level}{}", locale_suffix(.locale))]
    UnboundIdentifier {
        path: String,
        segment: String,
        what: &'static str,
        level: String,
        locale: Option<String>,
    },

    /// Arguments given to a variable
    #[error("'{name}' is a variable and takes no arguments, but got {found}")]
    NotCallable { name: String, found: usize },

    /// Argument count outside the template's range
    #[error("Function '{name}' expects {}, but got {found}", arity_text(.min, .max))]
    ArityMismatch {
        name: String,
        min: usize,
        max: usize,
        found: usize,
    },

    /// Static type check failure on the bound tree
    #[error(transparent)]
    TypeCheck(#[from] TypeCheckError),

    /// Node invariant broken while rebuilding
    #[error(transparent)]
    Node(#[from] NodeError),
}

fn locale_suffix(locale: &Option<String>) -> String {
    locale
        .as_ref()
        .map(|locale| format!(" (locale: {locale})"))
        .unwrap_or_default()
}

/// Binding result
pub type BindResult<T> = Result<T, BindError>;

impl From<BindError> for VerdictError {
    fn from(err: BindError) -> Self {
        let message = err.to_string();
        match err {
            BindError::UnboundIdentifier { path, level, .. } => ErrorBuilder::new(VRD0100, message)
                .node(path)
                .context(format!("looked up in {level}"))
                .binding(),
            BindError::NotCallable { name, .. } | BindError::ArityMismatch { name, .. } => {
                ErrorBuilder::new(VRD0101, message).node(name).binding()
            }
            BindError::TypeCheck(err) => err.into(),
            BindError::Node(err) => err.into(),
        }
    }
}

/// Binds placeholders against one namespace in one locale
#[derive(Debug, Clone, Copy)]
pub struct Binder<'a> {
    namespace: &'a Namespace,
    locale: Option<&'a str>,
}

impl<'a> Binder<'a> {
    /// Create a binder; `None` matches global names
    pub fn new(namespace: &'a Namespace, locale: Option<&'a str>) -> Self {
        Self { namespace, locale }
    }

    /// Bind every placeholder in `node` and type check the result
    ///
    /// Binding a tree without placeholders returns an equal tree.
    pub fn bind(&self, node: &Node) -> BindResult<Node> {
        let bound = self.rewrite(node)?.unwrap_or_else(|| node.clone());
        check(&bound)?;
        Ok(bound)
    }

    /// Rewrite a node; `None` means the node holds no placeholder
    fn rewrite(&self, node: &Node) -> BindResult<Option<Node>> {
        match node {
            Node::Placeholder(placeholder) => self.resolve(placeholder).map(Some),
            Node::Constant(Constant::Set(set)) => self.rewrite_set(set),
            Node::Constant(_) | Node::Variable(_) => Ok(None),
            Node::Function(call) => {
                let Some(args) = self.rewrite_all(&call.args)? else {
                    return Ok(None);
                };
                Ok(Some(Node::Function(FunctionCall {
                    path: call.path.clone(),
                    def: Arc::clone(&call.def),
                    args,
                })))
            }
            Node::Unary(expr) => Ok(self.rewrite_shared(&expr.operand)?.map(|operand| {
                Node::Unary(UnaryExpr {
                    op: expr.op,
                    operand,
                })
            })),
            Node::Binary(expr) => {
                let left = self.rewrite_shared(&expr.left)?;
                let right = self.rewrite_shared(&expr.right)?;
                if left.is_none() && right.is_none() {
                    return Ok(None);
                }
                Ok(Some(Node::Binary(BinaryExpr {
                    op: expr.op,
                    left: left.unwrap_or_else(|| Arc::clone(&expr.left)),
                    right: right.unwrap_or_else(|| Arc::clone(&expr.right)),
                })))
            }
        }
    }

    fn rewrite_shared(&self, node: &Arc<Node>) -> BindResult<Option<Arc<Node>>> {
        Ok(self.rewrite(node)?.map(Arc::new))
    }

    fn rewrite_all(&self, nodes: &[Arc<Node>]) -> BindResult<Option<Vec<Arc<Node>>>> {
        let mut changed = false;
        let mut out = Vec::with_capacity(nodes.len());
        for node in nodes {
            match self.rewrite_shared(node)? {
                Some(bound) => {
                    changed = true;
                    out.push(bound);
                }
                None => out.push(Arc::clone(node)),
            }
        }
        Ok(changed.then_some(out))
    }

    fn rewrite_set(&self, set: &SetLiteral) -> BindResult<Option<Node>> {
        let mut changed = false;
        let mut members = Vec::with_capacity(set.len());
        for member in set {
            match self.rewrite(member)? {
                Some(bound) => {
                    changed = true;
                    members.push(bound);
                }
                None => members.push(member.clone()),
            }
        }
        if !changed {
            return Ok(None);
        }
        Ok(Some(Node::set(members)?))
    }

    fn resolve(&self, placeholder: &Placeholder) -> BindResult<Node> {
        let segments = placeholder.full_path();
        let symbol = self.lookup(placeholder, &segments)?;
        let path = IdentifierPath::from_segments(segments.iter().copied())?;
        debug!("Resolved '{path}' to {symbol}");

        match symbol {
            Symbol::Variable(def) => match &placeholder.arguments {
                None => Ok(Node::bound_variable(path, Arc::clone(def))),
                Some(args) => Err(BindError::NotCallable {
                    name: path.to_string(),
                    found: args.len(),
                }),
            },
            Symbol::Function(def) => {
                let args = placeholder.arguments.as_deref().unwrap_or_default();
                if let Err(NodeError::ArityMismatch {
                    min, max, found, ..
                }) = def.check_arity(args.len())
                {
                    return Err(BindError::ArityMismatch {
                        name: path.to_string(),
                        min,
                        max,
                        found,
                    });
                }
                let mut bound_args = Vec::with_capacity(args.len());
                for arg in args {
                    let bound = self.rewrite(arg)?.unwrap_or_else(|| arg.clone());
                    bound_args.push(Arc::new(bound));
                }
                Ok(Node::bound_function_shared(path, Arc::clone(def), bound_args)?)
            }
        }
    }

    fn lookup(&self, placeholder: &Placeholder, segments: &[&str]) -> BindResult<&'a Symbol> {
        let unbound = |segment: &str, what: &'static str, level: &Namespace| {
            BindError::UnboundIdentifier {
                path: placeholder.to_string(),
                segment: segment.to_string(),
                what,
                level: describe(level),
                locale: self.locale.map(str::to_string),
            }
        };

        let Some((name, namespaces)) = segments.split_last() else {
            return Err(unbound("", "object", self.namespace));
        };
        let mut level = self.namespace;
        for segment in namespaces {
            trace!("Descending into '{segment}' from {}", describe(level));
            level = level
                .namespace(segment, self.locale)
                .ok_or_else(|| unbound(segment, "namespace", level))?;
        }
        level
            .object(name, self.locale)
            .ok_or_else(|| unbound(name, "variable or function", level))
    }
}

fn describe(level: &Namespace) -> String {
    level_name(level.path())
}

/// Bind every placeholder in `node` against `namespace`
///
/// `locale` selects the spelling table; `None` uses global names.
/// Like type checking, binding recurses to the full depth of the tree.
pub fn bind(node: &Node, namespace: &Namespace, locale: Option<&str>) -> BindResult<Node> {
    Binder::new(namespace, locale).bind(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::{Bind, NamespaceBuilder};
    use pretty_assertions::assert_eq;
    use verdict_ast::{FunctionDef, Parameter, ValueKind, VariableDef};

    fn namespace() -> Namespace {
        NamespaceBuilder::new()
            .variable(VariableDef::new("age").unwrap().with_kind(ValueKind::Number))
            .function(
                FunctionDef::new("days_since")
                    .unwrap()
                    .required(Parameter::typed("date", ValueKind::String))
                    .optional(Parameter::typed("unit", ValueKind::String), "days")
                    .returns(ValueKind::Number),
            )
            .namespace(
                NamespaceBuilder::named("user")
                    .alias("es", "usuario")
                    .bind(Bind::variable(VariableDef::new("role").unwrap()).alias("es", "rol")),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_bind_variable() {
        let ns = namespace();
        let tree = Node::equal(Node::placeholder("user.role").unwrap(), "admin");
        let bound = bind(&tree, &ns, None).unwrap();

        let Node::Binary(expr) = &bound else {
            panic!("expected a binary node");
        };
        let Node::Variable(var) = expr.left.as_ref() else {
            panic!("expected a variable");
        };
        assert_eq!(var.def.qualified_name().to_string(), "user.role");
        assert!(bound.is_bound());
    }

    #[test]
    fn test_localized_path_is_kept() {
        let ns = namespace();
        let bound = bind(&Node::placeholder("usuario.rol").unwrap(), &ns, Some("es")).unwrap();
        assert_eq!(bound.to_string(), "usuario.rol");
        let Node::Variable(var) = &bound else {
            panic!("expected a variable");
        };
        assert_eq!(var.def.qualified_name().to_string(), "user.role");
    }

    #[test]
    fn test_unbound_namespace() {
        let ns = NamespaceBuilder::new().build().unwrap();
        let err = bind(&Node::placeholder("user.role").unwrap(), &ns, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot resolve 'user.role': no namespace called 'user' in the root namespace"
        );
    }

    #[test]
    fn test_function_arguments_and_defaults() {
        let ns = namespace();
        let tree = Node::greater_than(
            Node::placeholder_call("days_since", vec![Node::string("2024-01-01")]).unwrap(),
            30,
        );
        let bound = bind(&tree, &ns, None).unwrap();
        assert_eq!(bound.to_string(), "days_since(\"2024-01-01\", \"days\") > 30");
    }

    #[test]
    fn test_arity_mismatch() {
        let ns = namespace();
        let tree = Node::placeholder_call("days_since", vec![]).unwrap();
        assert!(matches!(
            bind(&tree, &ns, None),
            Err(BindError::ArityMismatch { min: 1, max: 2, found: 0, .. })
        ));
    }

    #[test]
    fn test_variable_with_arguments() {
        let ns = namespace();
        let tree = Node::placeholder_call("age", vec![Node::number(1)]).unwrap();
        assert!(matches!(
            bind(&tree, &ns, None),
            Err(BindError::NotCallable { found: 1, .. })
        ));
    }

    #[test]
    fn test_static_check_after_binding() {
        let ns = namespace();
        let tree = Node::equal(Node::placeholder("age").unwrap(), "thirty");
        assert!(matches!(
            bind(&tree, &ns, None),
            Err(BindError::TypeCheck(_))
        ));
    }

    #[test]
    fn test_bound_subtrees_are_shared() {
        let ns = namespace();
        let left = Node::equal(Node::string("a"), "a");
        let tree = Node::and(left, Node::placeholder("user.role").unwrap());
        let bound = bind(&tree, &ns, None).unwrap();

        let (Node::Binary(before), Node::Binary(after)) = (&tree, &bound) else {
            panic!("expected binary nodes");
        };
        assert!(Arc::ptr_eq(&before.left, &after.left));
    }

    #[test]
    fn test_binding_is_idempotent() {
        let ns = namespace();
        let tree = Node::belongs_to(
            Node::placeholder("user.role").unwrap(),
            Node::set([Node::string("admin"), Node::string("staff")]).unwrap(),
        );
        let once = bind(&tree, &ns, None).unwrap();
        let twice = bind(&once, &ns, None).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_placeholders_inside_sets() {
        let ns = namespace();
        let tree = Node::belongs_to(
            "admin",
            Node::set([Node::placeholder("user.role").unwrap()]).unwrap(),
        );
        assert!(bind(&tree, &ns, None).unwrap().is_bound());
    }
}
