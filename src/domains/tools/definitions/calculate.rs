//! Calculator tool definition.
//!
//! Performs basic arithmetic on two numbers. Results are rendered with
//! exactly two decimal places.

use std::str::FromStr;

use tracing::{info, instrument, warn};

use crate::domains::tools::{ArgumentBag, Parameter, ToolDefinition, ToolError, ToolOutput};

/// Arithmetic operation supported by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Apply the operation. Division by zero yields `None`.
    pub fn apply(&self, x: f64, y: f64) -> Option<f64> {
        match self {
            Operation::Add => Some(x + y),
            Operation::Subtract => Some(x - y),
            Operation::Multiply => Some(x * y),
            Operation::Divide if y == 0.0 => None,
            Operation::Divide => Some(x / y),
        }
    }
}

impl FromStr for Operation {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ToolError::InvalidValue {
                name: "operation".to_string(),
                value: s.to_string(),
                allowed: Self::ALL.iter().map(|op| op.as_str().to_string()).collect(),
            })
    }
}

/// Calculator tool - add, subtract, multiply or divide two numbers.
pub struct CalculateTool;

impl CalculateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calculate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Perform basic arithmetic operations";

    /// Message returned when dividing by zero.
    pub const DIVIDE_BY_ZERO: &'static str = "cannot divide by zero";

    pub fn parameters() -> Vec<Parameter> {
        vec![
            Parameter::string(
                "operation",
                "The operation to perform (add, subtract, multiply, divide)",
            )
            .required()
            .one_of(Operation::ALL.iter().map(Operation::as_str)),
            Parameter::number("x", "First number").required(),
            Parameter::number("y", "Second number").required(),
        ]
    }

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(args: &ArgumentBag) -> Result<ToolOutput, ToolError> {
        let operation: Operation = args.require_string("operation")?.parse()?;
        let x = args.require_number("x")?;
        let y = args.require_number("y")?;

        info!("Calculate tool called: {} {} {}", operation.as_str(), x, y);

        match operation.apply(x, y) {
            Some(result) => Ok(ToolOutput::ok(format!("{:.2}", result))),
            None => {
                warn!("Division by zero requested");
                Ok(ToolOutput::error(Self::DIVIDE_BY_ZERO))
            }
        }
    }

    /// Registry entry for this tool.
    pub fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, Self::DESCRIPTION, Self::parameters(), Self::execute)
    }
}
