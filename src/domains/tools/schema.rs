//! Declared parameter schemas for tools.
//!
//! A tool declares an ordered list of [`Parameter`]s. The registry validates
//! every call against them before the handler runs, and renders them as a
//! JSON Schema object for capability discovery.

use serde_json::{Map, Value, json};

use super::args::ArgumentBag;
use super::error::ToolError;

/// The value kind a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
}

impl ParamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Number => "number",
        }
    }
}

impl std::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declaration of a single tool parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Parameter name, the key in the argument bag.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Accepted value kind.
    pub kind: ParamKind,
    /// Whether the parameter must be present in every call.
    pub required: bool,
    /// Allowed string values, if the parameter is enumerated.
    pub allowed_values: Option<Vec<String>>,
}

impl Parameter {
    fn new(name: impl Into<String>, description: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
            required: false,
            allowed_values: None,
        }
    }

    /// An optional string parameter.
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, description, ParamKind::String)
    }

    /// An optional number parameter.
    pub fn number(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, description, ParamKind::Number)
    }

    /// Mark the parameter as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restrict a string parameter to the given values.
    pub fn one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Check this parameter against a call's arguments.
    pub fn check(&self, args: &ArgumentBag) -> Result<(), ToolError> {
        match self.kind {
            ParamKind::Number => {
                if self.required {
                    args.require_number(&self.name)?;
                } else {
                    args.optional_number(&self.name)?;
                }
                Ok(())
            }
            ParamKind::String => {
                let value = if self.required {
                    Some(args.require_string(&self.name)?)
                } else {
                    args.optional_string(&self.name)?
                };
                match (value, &self.allowed_values) {
                    (Some(value), Some(allowed)) if !allowed.iter().any(|a| a == value) => {
                        Err(ToolError::InvalidValue {
                            name: self.name.clone(),
                            value: value.to_string(),
                            allowed: allowed.clone(),
                        })
                    }
                    _ => Ok(()),
                }
            }
        }
    }

    /// JSON Schema fragment describing this parameter.
    pub fn json_schema(&self) -> Value {
        let mut schema = json!({
            "type": self.kind.as_str(),
            "description": self.description,
        });
        if let Some(allowed) = &self.allowed_values {
            schema["enum"] = json!(allowed);
        }
        schema
    }
}

/// Validate a call's arguments against an ordered parameter list.
///
/// Parameters are checked in declaration order and the first failure wins.
pub fn validate(parameters: &[Parameter], args: &ArgumentBag) -> Result<(), ToolError> {
    parameters.iter().try_for_each(|param| param.check(args))
}

/// Render an ordered parameter list as a JSON Schema object.
pub fn input_schema(parameters: &[Parameter]) -> Map<String, Value> {
    let properties: Map<String, Value> = parameters
        .iter()
        .map(|p| (p.name.clone(), p.json_schema()))
        .collect();
    let required: Vec<&str> = parameters
        .iter()
        .filter(|p| p.required)
        .map(|p| p.name.as_str())
        .collect();

    let mut schema = Map::new();
    schema.insert("type".to_string(), json!("object"));
    schema.insert("properties".to_string(), Value::Object(properties));
    schema.insert("required".to_string(), json!(required));
    schema
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc_params() -> Vec<Parameter> {
        vec![
            Parameter::string("operation", "The operation")
                .required()
                .one_of(["add", "subtract"]),
            Parameter::number("x", "First number").required(),
            Parameter::number("y", "Second number").required(),
        ]
    }

    fn bag(value: Value) -> ArgumentBag {
        ArgumentBag::try_from(value).unwrap()
    }

    #[test]
    fn test_validate_accepts_valid_call() {
        let args = bag(json!({ "operation": "add", "x": 1, "y": 2.5 }));
        assert_eq!(validate(&calc_params(), &args), Ok(()));
    }

    #[test]
    fn test_validate_rejects_value_outside_enum() {
        let args = bag(json!({ "operation": "modulo", "x": 1, "y": 2 }));
        match validate(&calc_params(), &args) {
            Err(ToolError::InvalidValue { name, value, .. }) => {
                assert_eq!(name, "operation");
                assert_eq!(value, "modulo");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_is_fail_fast_in_declared_order() {
        // Both x and y are wrong; x is declared first.
        let args = bag(json!({ "operation": "add", "x": "one", "y": null }));
        assert_eq!(
            validate(&calc_params(), &args),
            Err(ToolError::wrong_type("x", "number"))
        );

        let args = bag(json!({ "y": 2 }));
        assert_eq!(
            validate(&calc_params(), &args),
            Err(ToolError::missing_field("operation"))
        );
    }

    #[test]
    fn test_optional_parameter_may_be_absent() {
        let params = vec![Parameter::string("format", "Time format")];
        assert_eq!(validate(&params, &ArgumentBag::new()), Ok(()));
        assert_eq!(
            validate(&params, &bag(json!({ "format": 42 }))),
            Err(ToolError::wrong_type("format", "string"))
        );
    }

    #[test]
    fn test_input_schema() {
        let schema = Value::Object(input_schema(&calc_params()));
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["x"]["type"], "number");
        assert_eq!(
            schema["properties"]["operation"]["enum"],
            json!(["add", "subtract"])
        );
        assert_eq!(schema["required"], json!(["operation", "x", "y"]));
    }
}
