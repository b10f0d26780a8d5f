//! Argument type descriptors
//!
//! A story declares, per argument name, the shape it expects and an
//! optional allow-list of permitted values. The store never validates the
//! descriptors themselves; it only uses them to coerce and filter values
//! coming from outside the running session.
//!
//! ## Wire form
//!
//! Descriptors deserialize from the host's JSON form:
//!
//! ```json
//! {
//!   "color": { "type": { "name": "string" }, "options": ["red", "blue"] },
//!   "tags":  { "type": { "name": "array", "value": { "name": "string" } } }
//! }
//! ```

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Argument name -> descriptor
pub type ArgTypes = BTreeMap<String, ArgType>;

/// Expected shape of one argument value
///
/// Closed set of shapes, dispatched by `match` during coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum ArgShape {
    /// Coerced to a string
    String,
    /// Coerced to a number
    Number,
    /// Coerced to a boolean
    Boolean,
    /// Enumerated value, passed through unchanged
    Enum,
    /// Callback placeholder, passed through unchanged
    Function,
    /// Keyed object; every entry is coerced with `value`
    Object {
        /// Shape of each entry value
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Box<ArgShape>>,
    },
    /// Sequence; every element is coerced with `value`
    Array {
        /// Shape of each element
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Box<ArgShape>>,
    },
    /// Any shape this store does not know, passed through unchanged
    #[serde(other)]
    Other,
}

impl ArgShape {
    /// Object whose entry values have `value` shape
    pub fn object_of(value: ArgShape) -> Self {
        ArgShape::Object {
            value: Some(Box::new(value)),
        }
    }

    /// Array whose elements have `value` shape
    pub fn array_of(value: ArgShape) -> Self {
        ArgShape::Array {
            value: Some(Box::new(value)),
        }
    }

    /// Shape name as the host spells it
    pub fn name(&self) -> &'static str {
        match self {
            ArgShape::String => "string",
            ArgShape::Number => "number",
            ArgShape::Boolean => "boolean",
            ArgShape::Enum => "enum",
            ArgShape::Function => "function",
            ArgShape::Object { .. } => "object",
            ArgShape::Array { .. } => "array",
            ArgShape::Other => "other",
        }
    }
}

/// Descriptor for one argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgType {
    /// Expected shape
    #[serde(rename = "type")]
    pub shape: ArgShape,

    /// Allow-list of permitted values, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<Value>>,
}

impl ArgType {
    /// Descriptor with no allow-list
    pub fn new(shape: ArgShape) -> Self {
        Self {
            shape,
            options: None,
        }
    }

    /// Attach an allow-list of permitted values
    pub fn with_options<I, V>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }
}
