//! Simple MCP Server Library
//!
//! This crate provides a small Model Context Protocol (MCP) server exposing
//! echo, time and calculator tools, plus an HTTP client for it.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: argument extraction, parameter schemas, the tool registry,
//!     the output envelope and the tool definitions
//! - **client**: JSON-RPC over HTTP client (feature `client`)
//!
//! # Example
//!
//! ```rust
//! use simple_mcp_server::domains::tools::{ArgumentBag, ToolOutput, ToolRegistry};
//!
//! let registry = ToolRegistry::with_builtin_tools().unwrap();
//! let args = ArgumentBag::new()
//!     .with_arg("operation", "add")
//!     .with_arg("x", 5)
//!     .with_arg("y", 3);
//! assert_eq!(registry.call("calculate", &args), ToolOutput::ok("8.00"));
//! ```

pub mod core;
pub mod domains;

#[cfg(feature = "client")]
pub mod client;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
