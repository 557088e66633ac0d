//! Document generation tools.

pub mod generate;

pub use generate::{GenerateDocumentParams, GenerateDocumentTool};
