//! Text analysis tools.

pub mod sentiment;

pub use sentiment::{AnalyzeSentimentParams, AnalyzeSentimentTool, Sentiment};
