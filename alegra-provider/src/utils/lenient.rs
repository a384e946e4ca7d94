//! Lenient deserialization helpers for vendor payloads
//!
//! Alegra sends optional sub-objects as `null`, `""` or `[]`, and lists may
//! contain stray `null`s. These helpers accept what the API actually sends
//! instead of failing the whole payload. Scalars need no helper: they are
//! kept as `serde_json::Value`.
//!
//! Use with `#[serde(default, deserialize_with = "...")]` so that absent
//! fields also become `None`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn from_object<T: DeserializeOwned>(value: Value) -> Option<T> {
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value)
        .map_err(|e| log::warn!("[alegra] nested object rejected: {e}"))
        .ok()
}

/// Nested object: only JSON objects are deserialized, anything else is `None`.
pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(from_object))
}

/// Nested list: only JSON arrays are deserialized, anything else is `None`.
///
/// Elements are read one by one. An element that is not an object becomes
/// `T::default()`, so positions and length match the source array.
pub fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(entries)) => Some(
            entries
                .into_iter()
                .map(|entry| from_object(entry).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}
