//! Tool output envelope.
//!
//! Every tool invocation produces exactly one [`ToolOutput`]: either a text
//! payload or an error message. Transports translate the tag into their own
//! wire-level signaling.

use rmcp::model::{CallToolResult, Content};

/// Outcome of a tool execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutput {
    /// Successful execution with a textual result.
    Text(String),
    /// Failed execution with a human-readable message.
    Error(String),
}

impl ToolOutput {
    /// Create a successful tool output.
    pub fn ok(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a failed tool output.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The payload, regardless of the tag.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Error(text) => text,
        }
    }

    /// MCP `tools/call` result shape used by the HTTP transport.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "content": [{ "type": "text", "text": self.text() }],
            "isError": self.is_error()
        })
    }

    /// Rebuild an output from an MCP `tools/call` result.
    ///
    /// Text content items are joined with newlines; a missing `isError` flag
    /// means success.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let content = value.get("content")?.as_array()?;
        let text = content
            .iter()
            .filter_map(|item| item.get("text").and_then(|t| t.as_str()))
            .collect::<Vec<_>>()
            .join("\n");
        let is_error = value
            .get("isError")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        Some(if is_error {
            Self::Error(text)
        } else {
            Self::Text(text)
        })
    }
}

impl From<ToolOutput> for CallToolResult {
    fn from(output: ToolOutput) -> Self {
        match output {
            ToolOutput::Text(text) => CallToolResult::success(vec![Content::text(text)]),
            ToolOutput::Error(message) => CallToolResult::error(vec![Content::text(message)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tags_are_exclusive() {
        let ok = ToolOutput::ok("8.00");
        assert!(!ok.is_error());
        assert_eq!(ok.text(), "8.00");

        let err = ToolOutput::error("cannot divide by zero");
        assert!(err.is_error());
        assert_eq!(err.text(), "cannot divide by zero");
    }

    #[test]
    fn test_to_json_shape() {
        assert_eq!(
            ToolOutput::error("boom").to_json(),
            json!({
                "content": [{ "type": "text", "text": "boom" }],
                "isError": true
            })
        );
    }

    #[test]
    fn test_from_json_defaults_to_success() {
        let value = json!({ "content": [{ "type": "text", "text": "hi" }] });
        assert_eq!(ToolOutput::from_json(&value), Some(ToolOutput::ok("hi")));
        assert_eq!(ToolOutput::from_json(&json!({})), None);
    }

    #[test]
    fn test_into_call_tool_result() {
        let result: CallToolResult = ToolOutput::error("bad").into();
        assert_eq!(result.is_error, Some(true));

        let result: CallToolResult = ToolOutput::ok("good").into();
        assert!(!result.is_error.unwrap_or(false));
        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert_eq!(text, "good");
    }
}
