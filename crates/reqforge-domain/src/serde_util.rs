//! Lenient deserializers for records produced outside this workspace.
//!
//! Extractors and summarizers are external collaborators, so their output is
//! read with well-defined fallbacks instead of hard failures.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Treat an explicit `null` the same as an absent field.
///
/// Pair with `#[serde(default)]` so both cases land on `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Coerce a JSON value into a float.
///
/// Accepts numbers and numeric strings. Anything else yields `None`.
pub fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(_) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Deserialize a confidence that may be a number, a numeric string, or junk.
///
/// Junk becomes `None` so each consumer applies its own fallback.
pub fn lenient_confidence<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_f64))
}

/// Coerce a JSON value into a list of page numbers.
///
/// A bare integer becomes a one-element list; non-integer entries are dropped.
pub fn coerce_pages(value: &Value) -> Vec<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|page| u32::try_from(page).ok())
            .into_iter()
            .collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_u64().and_then(|page| u32::try_from(page).ok()))
            .collect(),
        _ => Vec::new(),
    }
}

/// Deserialize `source_pages` given as an int, a list, or something else.
pub fn lenient_pages<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_pages).unwrap_or_default())
}

/// Coerce a JSON value into a page number.
///
/// Non-negative integers, integer-valued floats and numeric strings are
/// accepted. Anything else yields `None`.
pub fn coerce_page(value: &Value) -> Option<u32> {
    let whole = |f: f64| -> Option<u32> {
        (f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= f64::from(u32::MAX))
            .then_some(f as u32)
    };
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(page) => u32::try_from(page).ok(),
            None => n.as_f64().and_then(whole),
        },
        Value::String(s) => {
            let s = s.trim();
            match s.parse::<u64>() {
                Ok(page) => u32::try_from(page).ok(),
                Err(_) => s.parse::<f64>().ok().and_then(whole),
            }
        }
        Value::Bool(_) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Deserialize a page number; anything unusable becomes 0.
pub fn lenient_page<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_page).unwrap_or_default())
}

/// Deserialize a string field, yielding `None` for `null` or a non-string.
pub fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}
