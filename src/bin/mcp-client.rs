//! Demo client for the MCP server's HTTP transport.
//!
//! Initializes a session, lists the available tools and calls each of them.
//! The server URL comes from `MCP_SERVER_URL` (default `http://localhost:8080`).

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use simple_mcp_server::client::McpClient;
use simple_mcp_server::domains::tools::{ArgumentBag, ToolOutput};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let base_url =
        std::env::var("MCP_SERVER_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let rpc_path = std::env::var("MCP_HTTP_PATH").unwrap_or_else(|_| "/mcp".to_string());

    let client = McpClient::new(&base_url, &rpc_path);

    let server = client.initialize().await?;
    info!("Connected to {} v{} at {}", server.name, server.version, client.endpoint());

    info!("Available Tools:");
    for tool in client.list_tools().await? {
        info!(
            "Tool: {}. Description: {}",
            tool.name,
            tool.description.as_deref().unwrap_or("")
        );
    }

    let echo = client
        .call_tool(
            "echo",
            ArgumentBag::new().with_arg("message", "Hello from MCP client!"),
        )
        .await?;
    report("Echo", &echo);

    let time = client
        .call_tool(
            "time",
            ArgumentBag::new().with_arg("format", "%Y-%m-%d %H:%M:%S"),
        )
        .await?;
    report("Time", &time);

    let sum = client
        .call_tool(
            "calculate",
            ArgumentBag::new()
                .with_arg("operation", "add")
                .with_arg("x", 5)
                .with_arg("y", 3),
        )
        .await?;
    report("Calculate", &sum);

    let division = client
        .call_tool(
            "calculate",
            ArgumentBag::new()
                .with_arg("operation", "divide")
                .with_arg("x", 10)
                .with_arg("y", 0),
        )
        .await?;
    report("Calculate", &division);

    Ok(())
}

fn report(tool: &str, output: &ToolOutput) {
    match output {
        ToolOutput::Text(text) => info!("{} response: {}", tool, text),
        ToolOutput::Error(message) => warn!("{} error: {}", tool, message),
    }
}
