//! Operand templates
//!
//! A template describes a variable or function an application exposes to
//! expressions. Templates are registered in a namespace, which assigns each
//! its qualified global name; bound nodes share them behind an `Arc`.

use crate::{Constant, IdentifierPath, NodeError, NodeResult, ValueKind};

/// A variable template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDef {
    qualified_name: IdentifierPath,
    kind: Option<ValueKind>,
}

impl VariableDef {
    /// Create a variable template with the given global name
    pub fn new(name: impl Into<String>) -> NodeResult<Self> {
        Ok(Self {
            qualified_name: IdentifierPath::new(name)?,
            kind: None,
        })
    }

    /// Declare the kind of value the variable always yields
    pub fn with_kind(mut self, kind: ValueKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Place the template under a namespace path
    pub fn with_qualified_name(mut self, qualified_name: IdentifierPath) -> Self {
        self.qualified_name = qualified_name;
        self
    }

    /// The global name (last segment of the qualified name)
    pub fn name(&self) -> &str {
        self.qualified_name.name()
    }

    /// Fully qualified global name, e.g. `user.role`
    pub fn qualified_name(&self) -> &IdentifierPath {
        &self.qualified_name
    }

    pub fn kind(&self) -> Option<ValueKind> {
        self.kind
    }
}

/// A function parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    kind: Option<ValueKind>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
        }
    }

    /// Parameter that only accepts values of the given kind
    pub fn typed(name: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            kind: Some(kind),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Option<ValueKind> {
        self.kind
    }
}

/// A function template
///
/// Required parameters come first, then optional parameters, each with a
/// constant default used when the caller omits it.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    qualified_name: IdentifierPath,
    required: Vec<Parameter>,
    optional: Vec<(Parameter, Constant)>,
    returns: Option<ValueKind>,
}

impl FunctionDef {
    /// Create a function template with the given global name and no parameters
    pub fn new(name: impl Into<String>) -> NodeResult<Self> {
        Ok(Self {
            qualified_name: IdentifierPath::new(name)?,
            required: Vec::new(),
            optional: Vec::new(),
            returns: None,
        })
    }

    /// Append a required parameter
    pub fn required(mut self, param: Parameter) -> Self {
        self.required.push(param);
        self
    }

    /// Append an optional parameter with its default value
    pub fn optional(mut self, param: Parameter, default: impl Into<Constant>) -> Self {
        self.optional.push((param, default.into()));
        self
    }

    /// Declare the kind of value the function always returns
    pub fn returns(mut self, kind: ValueKind) -> Self {
        self.returns = Some(kind);
        self
    }

    /// Place the template under a namespace path
    pub fn with_qualified_name(mut self, qualified_name: IdentifierPath) -> Self {
        self.qualified_name = qualified_name;
        self
    }

    pub fn name(&self) -> &str {
        self.qualified_name.name()
    }

    pub fn qualified_name(&self) -> &IdentifierPath {
        &self.qualified_name
    }

    pub fn return_kind(&self) -> Option<ValueKind> {
        self.returns
    }

    /// All parameters in call order
    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.required
            .iter()
            .chain(self.optional.iter().map(|(param, _)| param))
    }

    /// Minimum and maximum accepted argument counts
    pub fn arity(&self) -> (usize, usize) {
        let min = self.required.len();
        (min, min + self.optional.len())
    }

    /// Check the template itself: parameter names are unique and defaults
    /// match the declared parameter kind.
    pub fn validate(&self) -> NodeResult<()> {
        let names: Vec<&str> = self.parameters().map(Parameter::name).collect();
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(self.invalid(format!("duplicate parameter '{name}'")));
            }
        }
        for (param, default) in &self.optional {
            if let Some(kind) = param.kind
                && kind != default.kind()
            {
                return Err(self.invalid(format!(
                    "default for '{}' is a {}, but the parameter takes {kind}",
                    param.name,
                    default.kind()
                )));
            }
        }
        Ok(())
    }

    /// Default values of the optional parameters, in call order
    pub fn defaults(&self) -> impl Iterator<Item = &Constant> {
        self.optional.iter().map(|(_, default)| default)
    }

    /// Check an argument count against the template
    pub fn check_arity(&self, found: usize) -> NodeResult<()> {
        let (min, max) = self.arity();
        if found < min || found > max {
            return Err(NodeError::ArityMismatch {
                name: self.qualified_name.to_string(),
                min,
                max,
                found,
            });
        }
        Ok(())
    }

    fn invalid(&self, message: String) -> NodeError {
        NodeError::InvalidTemplate {
            name: self.qualified_name.to_string(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn days_since() -> FunctionDef {
        FunctionDef::new("days_since")
            .unwrap()
            .required(Parameter::typed("date", ValueKind::String))
            .optional(Parameter::typed("unit", ValueKind::String), "days")
            .returns(ValueKind::Number)
    }

    #[test]
    fn test_arity() {
        let def = days_since();
        assert_eq!(def.arity(), (1, 2));
        assert!(def.check_arity(0).is_err());
        assert!(def.check_arity(1).is_ok());
        assert!(def.check_arity(2).is_ok());
        assert!(def.check_arity(3).is_err());
    }

    #[test]
    fn test_defaults() {
        let binding = days_since();
        let defaults: Vec<&Constant> = binding.defaults().collect();
        assert_eq!(defaults, [&Constant::from("days")]);
    }

    #[test]
    fn test_duplicate_parameter_rejected() {
        let def = FunctionDef::new("f")
            .unwrap()
            .required(Parameter::new("x"))
            .optional(Parameter::new("x"), 1);
        assert!(matches!(def.validate(), Err(NodeError::InvalidTemplate { .. })));
    }

    #[test]
    fn test_default_kind_must_match_parameter() {
        let def = FunctionDef::new("f")
            .unwrap()
            .optional(Parameter::typed("limit", ValueKind::Number), "ten");
        assert!(def.validate().is_err());
    }

    #[test]
    fn test_qualified_name() {
        let def = VariableDef::new("role")
            .unwrap()
            .with_qualified_name(IdentifierPath::parse("user.role").unwrap());
        assert_eq!(def.name(), "role");
        assert_eq!(def.qualified_name().to_string(), "user.role");
    }
}
