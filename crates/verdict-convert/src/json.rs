//! JSON Conversion
//!
//! Dumps a bound tree as nested JSON objects tagged with a `type` field,
//! one object per node.

use rust_decimal::Decimal;
use serde_json::{Value, json};
use verdict_ast::{BinaryOp, FunctionCall, VariableRef};

use crate::converter::Converter;
use crate::error::ConvertResult;

/// Structural JSON converter
///
/// Numbers are emitted as strings so no precision is lost. Variables and
/// functions carry their qualified global name, plus the path they were
/// bound from when it differs.
#[derive(Debug, Default, Clone)]
pub struct JsonConverter;

impl JsonConverter {
    /// Create a new JSON converter
    pub fn new() -> Self {
        Self
    }

    fn binary(&self, op: BinaryOp, left: Value, right: Value) -> ConvertResult<Value> {
        Ok(json!({
            "type": op.name(),
            "left": left,
            "right": right,
        }))
    }
}

impl Converter for JsonConverter {
    type Output = Value;

    fn string(&mut self, value: &str) -> ConvertResult<Value> {
        Ok(json!({ "type": "String", "value": value }))
    }

    fn number(&mut self, value: &Decimal) -> ConvertResult<Value> {
        Ok(json!({ "type": "Number", "value": value.to_string() }))
    }

    fn set(&mut self, members: Vec<Value>) -> ConvertResult<Value> {
        Ok(json!({ "type": "Set", "members": members }))
    }

    fn variable(&mut self, variable: &VariableRef) -> ConvertResult<Value> {
        let name = variable.def.qualified_name();
        let mut object = json!({ "type": "Variable", "name": name.to_string() });
        if &variable.path != name {
            object["path"] = Value::String(variable.path.to_string());
        }
        Ok(object)
    }

    fn function(&mut self, call: &FunctionCall, args: Vec<Value>) -> ConvertResult<Value> {
        let name = call.def.qualified_name();
        let mut object = json!({
            "type": "Function",
            "name": name.to_string(),
            "arguments": args,
        });
        if &call.path != name {
            object["path"] = Value::String(call.path.to_string());
        }
        Ok(object)
    }

    fn not(&mut self, operand: Value) -> ConvertResult<Value> {
        Ok(json!({ "type": "Not", "operand": operand }))
    }

    fn and(&mut self, left: Value, right: Value) -> ConvertResult<Value> {
        self.binary(BinaryOp::And, left, right)
    }

    fn or(&mut self, left: Value, right: Value) -> ConvertResult<Value> {
        self.binary(BinaryOp::Or, left, right)
    }

    fn xor(&mut self, left: Value, right: Value) -> ConvertResult<Value> {
        self.binary(BinaryOp::Xor, left, right)
    }

    fn equal(&mut self, left: Value, right: Value) -> ConvertResult<Value> {
        self.binary(BinaryOp::Equal, left, right)
    }

    fn not_equal(&mut self, left: Value, right: Value) -> ConvertResult<Value> {
        self.binary(BinaryOp::NotEqual, left, right)
    }

    fn less_than(&mut self, left: Value, right: Value) -> ConvertResult<Value> {
        self.binary(BinaryOp::LessThan, left, right)
    }

    fn greater_than(&mut self, left: Value, right: Value) -> ConvertResult<Value> {
        self.binary(BinaryOp::GreaterThan, left, right)
    }

    fn less_or_equal(&mut self, left: Value, right: Value) -> ConvertResult<Value> {
        self.binary(BinaryOp::LessOrEqual, left, right)
    }

    fn greater_or_equal(&mut self, left: Value, right: Value) -> ConvertResult<Value> {
        self.binary(BinaryOp::GreaterOrEqual, left, right)
    }

    fn belongs_to(&mut self, element: Value, set: Value) -> ConvertResult<Value> {
        self.binary(BinaryOp::BelongsTo, element, set)
    }

    fn is_subset(&mut self, subset: Value, superset: Value) -> ConvertResult<Value> {
        self.binary(BinaryOp::IsSubset, subset, superset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use verdict_ast::{IdentifierPath, Node, VariableDef};

    #[test]
    fn test_number_keeps_scale() {
        let value = convert(&Node::number(Decimal::new(2950, 2)), &mut JsonConverter::new()).unwrap();
        assert_eq!(value, json!({ "type": "Number", "value": "29.50" }));
    }

    #[test]
    fn test_localized_path_is_recorded() {
        let def = Arc::new(
            VariableDef::new("total")
                .unwrap()
                .with_qualified_name(IdentifierPath::parse("cart.total").unwrap()),
        );
        let node = Node::bound_variable(IdentifierPath::parse("carrito.total").unwrap(), def);
        let value = convert(&node, &mut JsonConverter::new()).unwrap();
        assert_eq!(
            value,
            json!({ "type": "Variable", "name": "cart.total", "path": "carrito.total" })
        );
    }
}
