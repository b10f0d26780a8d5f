//! Persisted argument values
//!
//! Values reloaded from outside the running session (a saved session, a
//! URL) are untrusted and may be partial. Arrays in particular may be
//! sparse: only some positions are supplied. Holes are explicit (`None`)
//! so a merge can tell "not supplied" apart from a supplied value.
//!
//! JSON cannot express holes; a sparse array serialized by the host comes
//! back with `null` in the missing positions. Both the serde form and the
//! `serde_json::Value` conversion therefore read a `null` array position
//! as a hole.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Argument name -> raw persisted value
pub type PersistedArgs = BTreeMap<String, PersistedValue>;

/// Raw persisted value tree
// Variant order matters for untagged deserialization: containers first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PersistedValue {
    /// Possibly sparse sequence; `None` marks a hole
    Array(Vec<Option<PersistedValue>>),
    /// Partial keyed object
    Object(BTreeMap<String, PersistedValue>),
    /// Any non-container value
    Scalar(Value),
}

impl PersistedValue {
    /// Build a sparse array of `len` positions with only `entries` supplied.
    ///
    /// Entries at or past `len` extend the array.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyargs_core::PersistedValue;
    ///
    /// // [, , "4"]
    /// let sparse = PersistedValue::sparse(3, [(2, PersistedValue::from("4"))]);
    /// assert_eq!(sparse.as_array().unwrap()[0], None);
    /// ```
    pub fn sparse<I>(len: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, PersistedValue)>,
    {
        let mut items: Vec<Option<PersistedValue>> = vec![None; len];
        for (index, value) in entries {
            if index >= items.len() {
                items.resize(index + 1, None);
            }
            items[index] = Some(value);
        }
        PersistedValue::Array(items)
    }

    /// Try to get the positions of an array
    pub fn as_array(&self) -> Option<&[Option<PersistedValue>]> {
        match self {
            PersistedValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get the scalar value
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            PersistedValue::Scalar(v) => Some(v),
            _ => None,
        }
    }

    /// Materialize as a dense [`Value`], dropping holes.
    pub fn into_value(self) -> Value {
        match self {
            PersistedValue::Scalar(v) => v,
            PersistedValue::Array(items) => Value::Array(
                items
                    .into_iter()
                    .flatten()
                    .map(PersistedValue::into_value)
                    .collect(),
            ),
            PersistedValue::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, v.into_value()))
                    .collect(),
            ),
        }
    }

    /// Type name for log messages
    pub fn type_name(&self) -> &'static str {
        match self {
            PersistedValue::Scalar(v) => v.type_name(),
            PersistedValue::Array(_) => "Array",
            PersistedValue::Object(_) => "Object",
        }
    }
}

impl From<Value> for PersistedValue {
    /// Dense conversion: arrays carry no holes.
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => PersistedValue::Array(
                items
                    .into_iter()
                    .map(|v| Some(PersistedValue::from(v)))
                    .collect(),
            ),
            Value::Object(map) => PersistedValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, PersistedValue::from(v)))
                    .collect(),
            ),
            scalar => PersistedValue::Scalar(scalar),
        }
    }
}

impl From<serde_json::Value> for PersistedValue {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Array(items) => PersistedValue::Array(
                items
                    .into_iter()
                    .map(|item| match item {
                        serde_json::Value::Null => None,
                        other => Some(PersistedValue::from(other)),
                    })
                    .collect(),
            ),
            serde_json::Value::Object(map) => PersistedValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, PersistedValue::from(v)))
                    .collect(),
            ),
            scalar => PersistedValue::Scalar(Value::from(scalar)),
        }
    }
}

impl From<&str> for PersistedValue {
    fn from(s: &str) -> Self {
        PersistedValue::Scalar(Value::from(s))
    }
}

impl From<String> for PersistedValue {
    fn from(s: String) -> Self {
        PersistedValue::Scalar(Value::from(s))
    }
}

impl From<i64> for PersistedValue {
    fn from(i: i64) -> Self {
        PersistedValue::Scalar(Value::Int(i))
    }
}

impl From<f64> for PersistedValue {
    fn from(f: f64) -> Self {
        PersistedValue::Scalar(Value::Float(f))
    }
}

impl From<bool> for PersistedValue {
    fn from(b: bool) -> Self {
        PersistedValue::Scalar(Value::Bool(b))
    }
}
