//! Echo tool definition.
//!
//! Returns the provided message unchanged.

use tracing::{info, instrument};

use crate::domains::tools::{ArgumentBag, Parameter, ToolDefinition, ToolError, ToolOutput};

/// Echo tool - echoes back the provided message.
pub struct EchoTool;

impl EchoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "echo";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Echoes back the provided message";

    pub fn parameters() -> Vec<Parameter> {
        vec![Parameter::string("message", "The message to echo back").required()]
    }

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(args: &ArgumentBag) -> Result<ToolOutput, ToolError> {
        let message = args.require_string("message")?;
        info!("Echo tool called with message: {}", message);
        Ok(ToolOutput::ok(message))
    }

    /// Registry entry for this tool.
    pub fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, Self::DESCRIPTION, Self::parameters(), Self::execute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn call(args: serde_json::Value) -> ToolOutput {
        EchoTool::definition().invoke(&ArgumentBag::try_from(args).unwrap())
    }

    #[test]
    fn test_echo_returns_message() {
        assert_eq!(
            call(json!({ "message": "Hello from MCP client!" })),
            ToolOutput::ok("Hello from MCP client!")
        );
    }

    #[test]
    fn test_echo_is_a_fixed_point() {
        for message in ["", "  spaced  ", "multi\nline", "ünïcödé ✓", "{\"json\":true}"] {
            assert_eq!(call(json!({ "message": message })), ToolOutput::ok(message));
        }
    }

    #[test]
    fn test_echo_missing_message() {
        let output = call(json!({}));
        assert!(output.is_error());
        assert!(output.text().contains("message"));
    }

    #[test]
    fn test_echo_wrong_type() {
        assert_eq!(
            call(json!({ "message": 42 })),
            ToolOutput::error("argument \"message\" is not a string")
        );
    }
}
