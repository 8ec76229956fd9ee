//! HTTP client for the MCP server.
//!
//! Speaks JSON-RPC 2.0 over `POST <base_url><rpc_path>`, the same protocol
//! the HTTP transport serves.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::{Value, json};
use thiserror::Error;
use tracing::debug;

use crate::core::transport::http::{JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION};
use crate::domains::tools::{ArgumentBag, ToolOutput};

/// Errors returned by [`McpClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP request itself failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a JSON-RPC error.
    #[error("JSON-RPC error {code}: {message}")]
    Rpc { code: i32, message: String },

    /// The server answered with something that is not a valid response.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A tool as advertised by `tools/list`.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInfo {
    pub name: String,
    pub description: Option<String>,
    pub input_schema: Value,
}

/// Server identity returned by `initialize`.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
    pub protocol_version: String,
    pub instructions: Option<String>,
}

/// JSON-RPC over HTTP client.
pub struct McpClient {
    http: reqwest::Client,
    endpoint: String,
    next_id: AtomicU64,
}

impl McpClient {
    /// Create a client for `base_url` (e.g. `http://localhost:8080`) and
    /// `rpc_path` (e.g. `/mcp`).
    pub fn new(base_url: &str, rpc_path: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), rpc_path),
            next_id: AtomicU64::new(1),
        }
    }

    /// The full JSON-RPC endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Perform the `initialize` handshake.
    pub async fn initialize(&self) -> Result<ServerInfo, ClientError> {
        let result = self
            .request(
                "initialize",
                Some(json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": {},
                    "clientInfo": {
                        "name": "simple-mcp-client",
                        "version": env!("CARGO_PKG_VERSION")
                    }
                })),
            )
            .await?;

        let field = |path: &[&str]| -> Option<String> {
            path.iter()
                .try_fold(&result, |v, key| v.get(key))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };

        Ok(ServerInfo {
            name: field(&["serverInfo", "name"])
                .ok_or_else(|| ClientError::InvalidResponse("missing serverInfo.name".into()))?,
            version: field(&["serverInfo", "version"]).unwrap_or_default(),
            protocol_version: field(&["protocolVersion"]).unwrap_or_default(),
            instructions: field(&["instructions"]),
        })
    }

    /// List the tools offered by the server.
    pub async fn list_tools(&self) -> Result<Vec<ToolInfo>, ClientError> {
        let result = self.request("tools/list", None).await?;
        let tools = result
            .get("tools")
            .and_then(|t| t.as_array())
            .ok_or_else(|| ClientError::InvalidResponse("missing tools array".into()))?;

        tools
            .iter()
            .map(|tool| {
                let name = tool
                    .get("name")
                    .and_then(|n| n.as_str())
                    .ok_or_else(|| ClientError::InvalidResponse("tool without name".into()))?;
                Ok(ToolInfo {
                    name: name.to_string(),
                    description: tool
                        .get("description")
                        .and_then(|d| d.as_str())
                        .map(str::to_string),
                    input_schema: tool.get("inputSchema").cloned().unwrap_or(Value::Null),
                })
            })
            .collect()
    }

    /// Call a tool. Tool-level failures come back as [`ToolOutput::Error`].
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: ArgumentBag,
    ) -> Result<ToolOutput, ClientError> {
        let arguments: Value = arguments.into();
        let result = self
            .request("tools/call", Some(json!({ "name": name, "arguments": arguments })))
            .await?;

        ToolOutput::from_json(&result)
            .ok_or_else(|| ClientError::InvalidResponse("missing content".into()))
    }

    async fn request(&self, method: &str, params: Option<Value>) -> Result<Value, ClientError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest::new(id, method, params);
        debug!("Sending {} (id {}) to {}", method, id, self.endpoint);

        let response: JsonRpcResponse = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(ClientError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        response
            .result
            .ok_or_else(|| ClientError::InvalidResponse("missing result".into()))
    }
}
