//! Evaluation contexts
//!
//! A context supplies the runtime values of bound variables and performs
//! bound function calls. The engine never inspects it otherwise.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use verdict_ast::{FunctionDef, VariableDef};

use crate::error::{EvalError, EvalResult};
use crate::value::Value;

/// Runtime capability used by the engine
///
/// Errors returned by a context are propagated to the caller unchanged.
pub trait Context {
    /// Value of a bound variable
    fn variable(&self, def: &VariableDef) -> EvalResult<Value>;

    /// Call a bound function with its evaluated arguments (one per
    /// parameter, defaults included)
    fn call(&self, def: &FunctionDef, args: &[Value]) -> EvalResult<Value>;
}

/// Type alias for function implementations registered in an [`EvaluationContext`]
pub type ContextFn = Arc<dyn Fn(&[Value]) -> EvalResult<Value> + Send + Sync>;

/// Map-backed context
///
/// Variables and functions are keyed by the qualified global name of their
/// template (`user.role`), so the same context serves every locale.
#[derive(Clone, Default)]
pub struct EvaluationContext {
    variables: HashMap<String, Value>,
    functions: HashMap<String, ContextFn>,
}

impl EvaluationContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable value
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_variable(name, value);
        self
    }

    /// Register a function implementation
    pub fn with_function<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&[Value]) -> EvalResult<Value> + Send + Sync + 'static,
    {
        self.register_function(name, f);
        self
    }

    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.variables.insert(name.into(), value.into());
    }

    pub fn register_function<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&[Value]) -> EvalResult<Value> + Send + Sync + 'static,
    {
        self.functions.insert(name.into(), Arc::new(f));
    }

    /// Get a variable value
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }
}

impl Context for EvaluationContext {
    fn variable(&self, def: &VariableDef) -> EvalResult<Value> {
        let name = def.qualified_name().to_string();
        self.variables
            .get(&name)
            .cloned()
            .ok_or_else(|| EvalError::undefined_variable(name))
    }

    fn call(&self, def: &FunctionDef, args: &[Value]) -> EvalResult<Value> {
        let name = def.qualified_name().to_string();
        let f = self
            .functions
            .get(&name)
            .ok_or_else(|| EvalError::undefined_function(&name))?;
        f(args)
    }
}

impl fmt::Debug for EvaluationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluationContext")
            .field("variables", &self.variables)
            .field("functions", &self.functions.keys().collect::<Vec<_>>())
            .finish()
    }
}
