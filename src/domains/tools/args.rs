//! Typed access to a call's untyped argument bag.

use serde_json::{Map, Value};

use super::error::ToolError;

/// The per-call argument payload, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentBag {
    arguments: Map<String, Value>,
}

impl ArgumentBag {
    /// Create an empty argument bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion, mostly useful for tests and the client.
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Get the raw value of an argument, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.arguments.get(key)
    }

    /// Whether the bag has no arguments at all.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Get a required string argument.
    pub fn require_string(&self, key: &str) -> Result<&str, ToolError> {
        match self.arguments.get(key) {
            None => Err(ToolError::missing_field(key)),
            Some(value) => value
                .as_str()
                .ok_or_else(|| ToolError::wrong_type(key, "string")),
        }
    }

    /// Get a required numeric argument.
    ///
    /// Integer and floating literals are both accepted; strings, booleans,
    /// nulls, arrays and objects are rejected.
    pub fn require_number(&self, key: &str) -> Result<f64, ToolError> {
        match self.arguments.get(key) {
            None => Err(ToolError::missing_field(key)),
            Some(value) => value
                .as_f64()
                .ok_or_else(|| ToolError::wrong_type(key, "number")),
        }
    }

    /// Get an optional string argument. An explicit `null` counts as absent.
    pub fn optional_string(&self, key: &str) -> Result<Option<&str>, ToolError> {
        match self.arguments.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(_) => self.require_string(key).map(Some),
        }
    }

    /// Get an optional numeric argument. An explicit `null` counts as absent.
    pub fn optional_number(&self, key: &str) -> Result<Option<f64>, ToolError> {
        match self.arguments.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(_) => self.require_number(key).map(Some),
        }
    }
}

impl From<Map<String, Value>> for ArgumentBag {
    fn from(arguments: Map<String, Value>) -> Self {
        Self { arguments }
    }
}

impl TryFrom<Value> for ArgumentBag {
    type Error = String;

    /// Accepts a JSON object, or `null` for "no arguments".
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self::from(map)),
            Value::Null => Ok(Self::new()),
            other => Err(format!("arguments must be an object, got {}", other)),
        }
    }
}

impl From<ArgumentBag> for Value {
    fn from(bag: ArgumentBag) -> Self {
        Value::Object(bag.arguments)
    }
}
