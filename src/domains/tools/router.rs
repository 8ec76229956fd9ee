//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! This module builds the ToolRouter for STDIO/TCP transport. Every tool in
//! the registry becomes one route; validation and dispatch go through the
//! same [`ToolDefinition::invoke`] path the HTTP transport uses.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
    model::{CallToolResult, JsonObject, Tool},
};

use super::{ArgumentBag, ToolDefinition, ToolRegistry};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .list()
        .fold(ToolRouter::new(), |router, tool| {
            router.with_route(create_route(tool.clone()))
        })
}

/// Create a Tool model for a definition (metadata).
pub fn to_tool(tool: &ToolDefinition) -> Tool {
    Tool {
        name: tool.name().to_string().into(),
        description: Some(tool.description().to_string().into()),
        input_schema: Arc::new(tool.input_schema()),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Create a ToolRoute for STDIO/TCP transport.
fn create_route<S>(tool: ToolDefinition) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_tool(&tool), move |ctx: ToolCallContext<'_, S>| {
        let result = dispatch(&tool, ctx.arguments.clone());
        async move { Ok::<_, McpError>(result) }.boxed()
    })
}

/// Run one routed call. Missing arguments are an empty bag.
fn dispatch(tool: &ToolDefinition, arguments: Option<JsonObject>) -> CallToolResult {
    let args = ArgumentBag::from(arguments.unwrap_or_default());
    tool.invoke(&args).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            other => panic!("expected text content, got {:?}", other),
        }
    }

    fn object(value: serde_json::Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let registry = ToolRegistry::with_builtin_tools().unwrap();
        let router: ToolRouter<TestServer> = build_tool_router(&registry);
        let tools = router.list_all();
        assert_eq!(tools.len(), 3);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"echo"));
        assert!(names.contains(&"time"));
        assert!(names.contains(&"calculate"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry = ToolRegistry::with_builtin_tools().unwrap();
        let router: ToolRouter<TestServer> = build_tool_router(&registry);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry.len(), router_names.len());
        for name in registry.names() {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_tool_model_carries_schema() {
        let registry = ToolRegistry::with_builtin_tools().unwrap();
        let tool = to_tool(registry.lookup("echo").unwrap());
        assert_eq!(tool.name, "echo");
        assert_eq!(
            tool.input_schema.get("required"),
            Some(&serde_json::json!(["message"]))
        );
    }

    #[test]
    fn test_dispatch_divide_by_zero_is_error_result() {
        let registry = ToolRegistry::with_builtin_tools().unwrap();
        let result = dispatch(
            registry.lookup("calculate").unwrap(),
            object(json!({ "operation": "divide", "x": 10, "y": 0 })),
        );
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "cannot divide by zero");
    }

    #[test]
    fn test_dispatch_success() {
        let registry = ToolRegistry::with_builtin_tools().unwrap();
        let result = dispatch(
            registry.lookup("calculate").unwrap(),
            object(json!({ "operation": "multiply", "x": 6, "y": 7 })),
        );
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), "42.00");
    }

    #[test]
    fn test_dispatch_without_arguments_reports_missing_field() {
        let registry = ToolRegistry::with_builtin_tools().unwrap();
        let result = dispatch(registry.lookup("echo").unwrap(), None);
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("message"));
    }
}
