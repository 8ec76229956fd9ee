//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool registration, lookup and argument extraction.
///
/// Business outcomes such as division by zero are not errors: handlers report
/// them as [`ToolOutput::Error`](super::ToolOutput) values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// A tool with this name is already registered.
    #[error("tool \"{0}\" is already registered")]
    DuplicateName(String),

    /// The requested tool was not found.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// A required argument is absent from the argument bag.
    #[error("required argument \"{0}\" not found")]
    MissingField(String),

    /// An argument is present but has the wrong type.
    #[error("argument \"{name}\" is not a {expected}")]
    WrongType {
        name: String,
        expected: &'static str,
    },

    /// A string argument is not among the declared allowed values.
    #[error("argument \"{name}\" must be one of [{}], got \"{value}\"", allowed.join(", "))]
    InvalidValue {
        name: String,
        value: String,
        allowed: Vec<String>,
    },
}

impl ToolError {
    /// Create a new "duplicate name" error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "missing field" error.
    pub fn missing_field(name: impl Into<String>) -> Self {
        Self::MissingField(name.into())
    }

    /// Create a new "wrong type" error.
    pub fn wrong_type(name: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongType {
            name: name.into(),
            expected,
        }
    }

    /// Whether this error comes from validating a call's arguments.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_) | Self::WrongType { .. } | Self::InvalidValue { .. }
        )
    }
}
