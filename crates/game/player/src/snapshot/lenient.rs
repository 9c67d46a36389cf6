//! Field decoders that turn malformed input into `None` instead of an error.
//!
//! Each decoder first buffers the field as a [`serde_json::Value`] and then
//! attempts the typed conversion, so a bad field never aborts decoding of the
//! rest of the snapshot.

use core::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::types::OakItem;

/// Integral value of a JSON number. Fractional numbers are floored, the way
/// a script runtime would have stored them.
fn whole_number(value: &Value) -> Option<i128> {
    let Value::Number(number) = value else {
        return None;
    };
    number
        .as_i64()
        .map(i128::from)
        .or_else(|| number.as_u64().map(i128::from))
        .or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.floor() as i128)
        })
}

fn convert<T: TryFrom<i128>>(value: &Value) -> Option<T> {
    whole_number(value).and_then(|n| T::try_from(n).ok())
}

pub(super) fn number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i128>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(convert(&value))
}

pub(super) fn number_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i128> + Default,
{
    Ok(number(deserializer)?.unwrap_or_default())
}

/// Index-preserving numeric array: bad elements become `None`.
pub(super) fn numbers<'de, D, T>(deserializer: D) -> Result<Option<Vec<Option<T>>>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i128>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(items.iter().map(convert).collect()),
        _ => None,
    })
}

pub(super) fn value<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

pub(super) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(value(deserializer)?.unwrap_or_default())
}

/// Array whose unreadable elements are dropped.
pub(super) fn filtered<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

/// Oak items were saved by display name; numeric discriminants are accepted too.
pub(super) fn oak_items<'de, D>(deserializer: D) -> Result<Option<Vec<OakItem>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(name) => OakItem::from_str(&name).ok(),
                    other => serde_json::from_value(other).ok(),
                })
                .collect(),
        ),
        _ => None,
    })
}
