//! Coercion of persisted values to declared argument shapes
//!
//! Persisted values may have lost their type on the way out of the session
//! (a URL carries everything as text) or may be stale relative to the
//! current descriptors. Each value is coerced to the shape its descriptor
//! declares; a value that cannot take that shape is incompatible and is
//! dropped, never reported as an error.

use storyargs_core::{ArgShape, ArgTypes, PersistedArgs, PersistedValue, StoryId, Value};
use tracing::debug;

/// Coerce every persisted argument to its declared shape.
///
/// Keys with no descriptor and values incompatible with their descriptor
/// are left out of the result.
pub fn map_args_to_types(
    story_id: &StoryId,
    persisted: &PersistedArgs,
    arg_types: &ArgTypes,
) -> PersistedArgs {
    let mut mapped = PersistedArgs::new();
    for (name, raw) in persisted {
        let Some(arg_type) = arg_types.get(name) else {
            debug!(story = %story_id, arg = %name, "dropping persisted arg with no descriptor");
            continue;
        };
        match coerce(raw, &arg_type.shape) {
            Some(value) => {
                mapped.insert(name.clone(), value);
            }
            None => debug!(
                story = %story_id,
                arg = %name,
                shape = arg_type.shape.name(),
                found = raw.type_name(),
                "dropping persisted arg incompatible with its type"
            ),
        }
    }
    mapped
}

/// Coerce one raw value to `shape`.
///
/// Returns `None` when the value is incompatible. Array elements that are
/// incompatible become holes rather than failing the whole array.
pub fn coerce(raw: &PersistedValue, shape: &ArgShape) -> Option<PersistedValue> {
    match shape {
        ArgShape::String => raw
            .as_scalar()
            .and_then(Value::scalar_to_string)
            .map(|s| PersistedValue::Scalar(Value::String(s))),
        ArgShape::Number => raw.as_scalar().and_then(to_number).map(PersistedValue::Scalar),
        ArgShape::Boolean => raw
            .as_scalar()
            .and_then(Value::scalar_to_string)
            .map(|s| PersistedValue::Scalar(Value::Bool(s == "true"))),
        ArgShape::Enum | ArgShape::Function | ArgShape::Other => Some(raw.clone()),
        ArgShape::Object { value } => {
            let entry_shape = value.as_deref()?;
            let PersistedValue::Object(entries) = raw else {
                return None;
            };
            Some(PersistedValue::Object(
                entries
                    .iter()
                    .filter_map(|(key, entry)| {
                        coerce(entry, entry_shape).map(|coerced| (key.clone(), coerced))
                    })
                    .collect(),
            ))
        }
        ArgShape::Array { value } => {
            let element_shape = value.as_deref()?;
            let PersistedValue::Array(items) = raw else {
                return None;
            };
            Some(PersistedValue::Array(
                items
                    .iter()
                    .map(|item| item.as_ref().and_then(|v| coerce(v, element_shape)))
                    .collect(),
            ))
        }
    }
}

/// Numbers pass through; numeric strings parse (integer first); booleans
/// become 1 or 0. Everything else has no numeric form.
fn to_number(value: &Value) -> Option<Value> {
    match value {
        Value::Int(_) | Value::Float(_) => Some(value.clone()),
        Value::Bool(b) => Some(Value::Int(i64::from(*b))),
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                Some(Value::Int(i))
            } else {
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(Value::Float)
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
