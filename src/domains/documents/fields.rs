//! Field defaulting and formatting shared by every template.
//!
//! Payload values arrive loosely typed. Scalars are kept as raw JSON in a
//! [`FieldValue`] and converted to text at render time; amounts are read as
//! numbers and always printed with two fractional digits.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// Text printed for an absent document-level amount.
pub const DEFAULT_AMOUNT: &str = "0.00";

/// A loosely typed scalar taken verbatim from the payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct FieldValue(pub Value);

impl FieldValue {
    /// Whether the value counts as "set" for defaulting purposes.
    ///
    /// `null`, `false`, zero, NaN and the empty string all fall back to the
    /// field's default text.
    pub fn is_set(&self) -> bool {
        match &self.0 {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self(Value::String(s.to_string()))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    write!(f, "{}", i)
                } else if let Some(u) = n.as_u64() {
                    write!(f, "{}", u)
                } else {
                    f.write_str(&format_number(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => f.write_str("null"),
            other => write!(f, "{}", other),
        }
    }
}

/// Read an optional collection, treating an unset value as absent.
///
/// `""`, `0`, `false` and `null` behave like a missing field; any other
/// value must have the collection's shape.
pub fn unset_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = FieldValue::deserialize(deserializer)?;
    if !value.is_set() {
        return Ok(None);
    }
    T::deserialize(value.0).map(Some).map_err(de::Error::custom)
}

/// Render a scalar field, substituting `default` when it is unset.
pub fn text_or(value: Option<&FieldValue>, default: &str) -> String {
    match value {
        Some(v) if v.is_set() => v.to_string(),
        _ => default.to_string(),
    }
}

/// Render an amount with exactly two fractional digits.
///
/// Exact ties round away from zero (`0.125` gives `0.13`). Magnitudes of
/// `1e21` and above fall back to [`format_number`].
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() || amount.abs() >= 1e21 {
        return format_number(amount);
    }
    // -0.0 prints as "0.00", small negatives keep their sign
    let amount = if amount == 0.0 { 0.0 } else { amount };

    // a binary value sits exactly halfway between two cents iff it is an
    // odd number of eighths
    let eighths = amount * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        let cents = (amount.abs() * 100.0 + 0.5) as u64;
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}{}.{:02}", sign, cents / 100, cents % 100);
    }

    format!("{:.2}", amount)
}

/// Render an optional document-level amount, falling back to [`DEFAULT_AMOUNT`].
pub fn amount_or_default(amount: Option<f64>) -> String {
    amount.map_or_else(|| DEFAULT_AMOUNT.to_string(), format_amount)
}

/// Plain-text form of a number: integral values print without a fraction.
///
/// Magnitudes of `1e21` and above or below `1e-6` use exponent form with an
/// explicit exponent sign (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let text = format!("{:e}", value);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        }
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// First token of a name, up to the first space.
///
/// Returns `None` when the name is absent or starts with a space.
pub fn first_name(name: Option<&FieldValue>) -> Option<String> {
    let name = name.filter(|v| !v.0.is_null())?.to_string();
    name.split(' ')
        .next()
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}
