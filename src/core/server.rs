//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler. It owns the tool registry,
//! which is built once at startup and shared read-only with every transport.
//!
//! - STDIO/TCP: rmcp drives the protocol through the `ToolRouter` built in
//!   `domains/tools/router.rs`.
//! - HTTP: the transport calls [`McpServer::list_tools`] and
//!   [`McpServer::call_tool`] directly.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use crate::domains::tools::{ArgumentBag, ToolError, ToolRegistry, build_tool_router};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registered tools, read-only after startup.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the built-in tools.
    ///
    /// Fails if the tool set cannot be registered (e.g. duplicate names);
    /// the process should not start serving in that case.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        let registry = ToolRegistry::with_builtin_tools()?;
        Ok(Self::with_registry(config, registry))
    }

    /// Create a new MCP server around an already built registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        info!("Registered {} tools: {}", registry.len(), registry.names().join(", "));

        Self {
            tool_router: build_tool_router::<Self>(&registry),
            config: Arc::new(config),
            registry: Arc::new(registry),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the instructions sent to clients on initialize.
    pub fn instructions(&self) -> &str {
        &self.config.server.instructions
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.registry.list().map(|t| t.to_json()).collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// An unknown tool or a non-object `arguments` value is an `Err`, so the
    /// transport can report it as a protocol error. Everything else, including
    /// validation and business failures, is an `Ok` result with `isError` set.
    #[instrument(skip(self, arguments))]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolCallError> {
        let tool = self.registry.lookup(name).map_err(|e| {
            warn!("Unknown tool requested: {}", name);
            ToolCallError::Tool(e)
        })?;
        let args = ArgumentBag::try_from(arguments).map_err(ToolCallError::InvalidArguments)?;

        let output = tool.invoke(&args);
        Ok(output.to_json())
    }
}

/// Failure to dispatch a tool call at all.
#[derive(Debug, thiserror::Error)]
pub enum ToolCallError {
    /// The tool does not exist.
    #[error("{0}")]
    Tool(#[from] ToolError),

    /// The arguments are not a JSON object.
    #[error("{0}")]
    InvalidArguments(String),
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::default()
            },
            instructions: Some(self.config.server.instructions.clone()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
