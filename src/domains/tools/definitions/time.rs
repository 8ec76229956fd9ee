//! Time tool definition.
//!
//! Returns the current local time rendered with a strftime-style pattern.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local};
use std::fmt::Write;
use tracing::{info, instrument};

use crate::domains::tools::{ArgumentBag, Parameter, ToolDefinition, ToolError, ToolOutput};

/// ISO-8601 with a numeric timezone offset, e.g. `2024-05-01T13:45:10+02:00`.
pub const DEFAULT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

// Longest specifier chrono understands is `%:::z`.
const MAX_SPECIFIER_LEN: usize = 5;

/// Time tool - returns the current time in the specified format.
pub struct TimeTool;

impl TimeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "time";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Returns the current time in the specified format";

    pub fn parameters() -> Vec<Parameter> {
        vec![Parameter::string(
            "format",
            "The time format to use (strftime-style, defaults to ISO-8601)",
        )]
    }

    /// Execute the tool logic. Never fails once arguments are valid.
    #[instrument(skip_all)]
    pub fn execute(args: &ArgumentBag) -> Result<ToolOutput, ToolError> {
        let format = match args.optional_string("format")? {
            Some(f) if !f.is_empty() => f,
            _ => DEFAULT_FORMAT,
        };
        info!("Time tool called with format: {}", format);

        let now: DateTime<FixedOffset> = Local::now().into();
        Ok(ToolOutput::ok(render(&now, format)))
    }

    /// Registry entry for this tool.
    pub fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, Self::DESCRIPTION, Self::parameters(), Self::execute)
    }
}

/// Render `time` with a strftime-style `pattern`, best-effort.
///
/// Specifiers chrono does not understand, or parses but cannot format
/// (e.g. `%#z`), are copied to the output verbatim instead of failing the
/// whole render.
pub fn render(time: &DateTime<FixedOffset>, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 16);
    let mut rest = pattern;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        match valid_specifier_len(rest).and_then(|len| format_one(time, &rest[..len])) {
            Some((rendered, len)) => {
                out.push_str(&rendered);
                rest = &rest[len..];
            }
            None => {
                out.push('%');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Format a single specifier, returning the text and the bytes consumed.
fn format_one(time: &DateTime<FixedOffset>, specifier: &str) -> Option<(String, usize)> {
    let mut rendered = String::new();
    write!(rendered, "{}", time.format(specifier)).ok()?;
    Some((rendered, specifier.len()))
}

/// Byte length of the shortest valid specifier at the start of `s`.
fn valid_specifier_len(s: &str) -> Option<usize> {
    s.char_indices()
        .skip(1)
        .take(MAX_SPECIFIER_LEN - 1)
        .map(|(i, c)| i + c.len_utf8())
        .find(|&end| is_valid_pattern(&s[..end]))
}

fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
