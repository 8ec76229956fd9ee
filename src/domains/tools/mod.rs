//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are named operations that MCP clients invoke with a loosely-typed
//! argument object.
//!
//! ## Architecture
//!
//! - `args.rs` - Typed extraction from the untyped argument bag
//! - `schema.rs` - Declared parameters, validation and JSON Schema rendering
//! - `output.rs` - Success/error output envelope
//! - `registry.rs` - Tool definitions and the name -> tool registry
//! - `router.rs` - rmcp ToolRouter built from the registry (STDIO/TCP)
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Declare its parameters and write `execute()` and `definition()`
//! 3. Export it in `definitions/mod.rs`
//! 4. Register it in `ToolRegistry::with_builtin_tools()`
//!
//! Both the HTTP transport and the rmcp router pick it up from the registry.

mod args;
pub mod definitions;
mod error;
mod output;
mod registry;
pub mod router;
pub mod schema;

pub use args::ArgumentBag;
pub use error::ToolError;
pub use output::ToolOutput;
pub use registry::{ToolDefinition, ToolHandlerFn, ToolRegistry};
pub use router::build_tool_router;
pub use schema::{ParamKind, Parameter};
