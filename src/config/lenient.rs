//! Deserialisers for string inputs that layered sources may type eagerly.
//!
//! The environment layer reads `CHATWORK_NOTIFY_ROOM_ID=42` as an integer,
//! `true` as a boolean, and splits unbracketed values on commas. Inputs are
//! validated later from their text, so every shape is folded back to a string.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a string, number, boolean, map, or sequence as `Option<String>`.
///
/// Sequences of scalars are rejoined with `", "`; maps are re-encoded as JSON
/// so a mapping read as a table still parses downstream.
pub(super) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(into_text))
}

fn into_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(into_text)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        map @ Value::Object(_) => Some(map.to_string()),
    }
}
