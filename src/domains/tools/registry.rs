//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - [`ToolDefinition`]: name, description, parameter schema and handler
//! - [`ToolRegistry`]: the startup-built mapping from name to definition
//!
//! The registry is built once before serving begins and is read-only
//! afterwards, so it can be shared across concurrent calls behind an `Arc`.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::args::ArgumentBag;
use super::definitions::{CalculateTool, EchoTool, TimeTool};
use super::error::ToolError;
use super::output::ToolOutput;
use super::schema::{self, Parameter};

/// Signature of a tool handler.
///
/// Extraction failures propagate as `Err` and are converted to failure
/// outputs at the dispatch boundary; business failures are returned as
/// `Ok(ToolOutput::Error(..))`.
pub type ToolHandlerFn = dyn Fn(&ArgumentBag) -> Result<ToolOutput, ToolError> + Send + Sync;

/// Immutable definition of a tool.
#[derive(Clone)]
pub struct ToolDefinition {
    name: String,
    description: String,
    parameters: Vec<Parameter>,
    handler: Arc<ToolHandlerFn>,
}

impl ToolDefinition {
    pub fn new<F>(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Vec<Parameter>,
        handler: F,
    ) -> Self
    where
        F: Fn(&ArgumentBag) -> Result<ToolOutput, ToolError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
            handler: Arc::new(handler),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// JSON Schema of the tool's input object.
    pub fn input_schema(&self) -> Map<String, Value> {
        schema::input_schema(&self.parameters)
    }

    /// Validate the arguments and run the handler.
    ///
    /// Never fails: validation errors become failure-tagged outputs and the
    /// handler is not executed.
    pub fn invoke(&self, args: &ArgumentBag) -> ToolOutput {
        if let Err(e) = schema::validate(&self.parameters, args) {
            warn!("Rejected call to {}: {}", self.name, e);
            return ToolOutput::error(e.to_string());
        }

        match (self.handler)(args) {
            Ok(output) => output,
            Err(e) => {
                warn!("Tool {} failed to extract arguments: {}", self.name, e);
                ToolOutput::error(e.to_string())
            }
        }
    }

    /// Discovery metadata: name, description and input schema.
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema()
        })
    }
}

impl fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, ToolDefinition>,
}

impl ToolRegistry {
    /// Create an empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in tools (echo, time, calculate).
    pub fn with_builtin_tools() -> Result<Self, ToolError> {
        let mut registry = Self::new();
        registry.register(EchoTool::definition())?;
        registry.register(TimeTool::definition())?;
        registry.register(CalculateTool::definition())?;
        Ok(registry)
    }

    /// Register a tool. Names must be unique.
    pub fn register(&mut self, tool: ToolDefinition) -> Result<(), ToolError> {
        if self.tools.contains_key(tool.name()) {
            return Err(ToolError::duplicate_name(tool.name()));
        }
        debug!("Registered tool: {}", tool.name());
        self.tools.insert(tool.name().to_string(), tool);
        Ok(())
    }

    /// Look up a tool by name.
    pub fn lookup(&self, name: &str) -> Result<&ToolDefinition, ToolError> {
        self.tools
            .get(name)
            .ok_or_else(|| ToolError::unknown_tool(name))
    }

    /// All registered tools, ordered by name.
    pub fn list(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values()
    }

    /// Get all tool names.
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Dispatch a call: look up the tool, validate, execute.
    ///
    /// All per-call failures, including an unknown tool name, come back as
    /// failure-tagged outputs.
    pub fn call(&self, name: &str, args: &ArgumentBag) -> ToolOutput {
        match self.lookup(name) {
            Ok(tool) => tool.invoke(args),
            Err(e) => {
                warn!("Unknown tool requested: {}", name);
                ToolOutput::error(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn bag(value: Value) -> ArgumentBag {
        ArgumentBag::try_from(value).unwrap()
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::with_builtin_tools().unwrap();
        assert_eq!(registry.names(), vec!["calculate", "echo", "time"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_register_duplicate_name() {
        let mut registry = ToolRegistry::with_builtin_tools().unwrap();
        let result = registry.register(EchoTool::definition());
        assert_eq!(result, Err(ToolError::duplicate_name("echo")));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_lookup_unknown() {
        let registry = ToolRegistry::new();
        assert_eq!(
            registry.lookup("nope").unwrap_err(),
            ToolError::unknown_tool("nope")
        );
    }

    #[test]
    fn test_call_unknown_is_a_failure_value() {
        let registry = ToolRegistry::with_builtin_tools().unwrap();
        let output = registry.call("unknown", &ArgumentBag::new());
        assert_eq!(output, ToolOutput::error("unknown tool: unknown"));
    }

    #[test]
    fn test_list_exposes_schema() {
        let registry = ToolRegistry::with_builtin_tools().unwrap();
        let calc = registry
            .list()
            .find(|t| t.name() == "calculate")
            .unwrap()
            .to_json();
        assert_eq!(calc["inputSchema"]["required"], json!(["operation", "x", "y"]));
        assert_eq!(
            calc["inputSchema"]["properties"]["operation"]["enum"],
            json!(["add", "subtract", "multiply", "divide"])
        );
    }

    #[test]
    fn test_handler_not_run_when_validation_fails() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut registry = ToolRegistry::new();
        registry
            .register(ToolDefinition::new(
                "count",
                "Counts invocations",
                vec![Parameter::number("n", "A number").required()],
                move |_args| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(ToolOutput::ok("counted"))
                },
            ))
            .unwrap();

        let output = registry.call("count", &ArgumentBag::new());
        assert_eq!(output, ToolOutput::error("required argument \"n\" not found"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let output = registry.call("count", &bag(json!({ "n": 1 })));
        assert_eq!(output, ToolOutput::ok("counted"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handler_extraction_fault_becomes_failure_value() {
        // Handler reads an argument the schema never declared.
        let mut registry = ToolRegistry::new();
        registry
            .register(ToolDefinition::new("loose", "No schema", Vec::new(), |args| {
                let v = args.require_string("value")?;
                Ok(ToolOutput::ok(v))
            }))
            .unwrap();

        assert_eq!(
            registry.call("loose", &ArgumentBag::new()),
            ToolOutput::error("required argument \"value\" not found")
        );
        assert_eq!(
            registry.call("loose", &bag(json!({ "value": "v" }))),
            ToolOutput::ok("v")
        );
    }

    #[test]
    fn test_registry_is_shareable_across_threads() {
        let registry = Arc::new(ToolRegistry::with_builtin_tools().unwrap());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    let args = bag(json!({ "operation": "add", "x": i, "y": 1 }));
                    registry.call("calculate", &args)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let expected = format!("{:.2}", i as f64 + 1.0);
            assert_eq!(handle.join().unwrap(), ToolOutput::ok(expected));
        }
    }
}
