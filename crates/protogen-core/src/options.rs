//! Typed access to descriptor option maps.
//!
//! Schema options are free-form annotation maps. A pass asks for one entry at
//! a time with [`try_get`]; every way that lookup can go wrong (no options,
//! options that are not a map, a missing or null entry, an entry of the wrong
//! shape) collapses to `None`.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Look up `key` in an options map and decode it as `T`.
///
/// # Examples
///
/// ```
/// use protogen_core::options::try_get;
/// use serde_json::json;
///
/// let options = json!({"default": "60", "deprecated": true});
///
/// assert_eq!(try_get::<String>(Some(&options), "default"), Some("60".to_string()));
/// assert_eq!(try_get::<bool>(Some(&options), "deprecated"), Some(true));
/// assert_eq!(try_get::<String>(Some(&options), "missing"), None);
/// assert_eq!(try_get::<String>(None, "default"), None);
/// ```
pub fn try_get<T: DeserializeOwned>(options: Option<&Value>, key: &str) -> Option<T> {
    let map = match options? {
        Value::Object(map) => map,
        other => {
            tracing::trace!(key, kind = value_kind(other), "options are not a map");
            return None;
        }
    };

    let entry = map.get(key)?;
    if entry.is_null() {
        return None;
    }

    match T::deserialize(entry) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::trace!(key, error = %err, "option value could not be decoded");
            None
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
