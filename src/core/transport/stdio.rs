//! STDIO transport: one MCP session over the process's stdin/stdout.
//!
//! Logging must stay on stderr while this transport runs.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

pub struct StdioTransport;

impl StdioTransport {
    /// Serve a single session; returns once the client closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let tools = server.registry().names().join(", ");
        info!("Ready - {} on stdin/stdout, tools: {}", server.name(), tools);

        let session = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::Handshake(e.to_string()))?;

        let quit = session
            .waiting()
            .await
            .map_err(|e| TransportError::Session(e.to_string()))?;

        info!("Client closed the session ({:?})", quit);
        Ok(())
    }
}
