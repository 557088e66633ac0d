//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod account;
pub mod common;
pub mod documents;
pub mod lookup;
pub mod math;
pub mod text;

pub use account::{GetTodosTool, GetUserProfileTool};
pub use documents::{GenerateDocumentParams, GenerateDocumentTool};
pub use lookup::{ConvertCurrencyParams, ConvertCurrencyTool, GetWeatherParams, GetWeatherTool};
pub use math::{AddTool, MultiplyTool, OperandsParams};
pub use text::{AnalyzeSentimentParams, AnalyzeSentimentTool};
