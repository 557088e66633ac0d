//! Arithmetic tools.

pub mod add;
pub mod multiply;

pub use add::AddTool;
pub use multiply::MultiplyTool;

use schemars::JsonSchema;
use serde::Deserialize;

/// Two numeric operands.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct OperandsParams {
    /// Left-hand operand.
    pub a: f64,

    /// Right-hand operand.
    pub b: f64,
}
