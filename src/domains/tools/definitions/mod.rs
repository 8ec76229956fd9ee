//! Tool definitions module.
//!
//! Each tool is defined in its own file and exposes `NAME`, `DESCRIPTION`,
//! `parameters()`, `execute()` and `definition()`.

pub mod calculate;
pub mod echo;
pub mod time;

pub use calculate::{CalculateTool, Operation};
pub use echo::EchoTool;
pub use time::TimeTool;
