//! Lookup tools backed by fixed tables.

pub mod currency;
pub mod weather;

pub use currency::{ConvertCurrencyParams, ConvertCurrencyTool};
pub use weather::{GetWeatherParams, GetWeatherTool};
