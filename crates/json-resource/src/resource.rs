use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{json_type_name, ResourceError};
use crate::Field;

/// Wrapper over one parsed JSON response object.
///
/// Every entry of the input map is classified once at construction (see
/// [`Field`]); the instance is immutable afterwards and safe to share
/// read-only across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    raw: Map<String, Value>,
    warnings: Option<Vec<Value>>,
    fields: IndexMap<String, Field>,
}

impl Resource {
    /// Wrap the whole mapping.
    pub fn new(map: Map<String, Value>) -> Resource {
        let warnings = extract_warnings(&map);
        let fields = build_fields(&map);
        Resource { raw: map, warnings, fields }
    }

    /// Wrap the sub-object under `key`, treating it as the effective root.
    ///
    /// Warnings are still captured from the top-level `map`; a response's
    /// `"warnings"` entry is metadata about the whole reply, not about the
    /// sub-object the caller is interested in.
    pub fn scoped(mut map: Map<String, Value>, key: &str) -> Result<Resource, ResourceError> {
        let warnings = extract_warnings(&map);
        let selected = map
            .remove(key)
            .ok_or_else(|| ResourceError::MissingKey(key.to_string()))?;
        let raw = match selected {
            Value::Object(inner) => inner,
            other => {
                return Err(ResourceError::NotAnObject {
                    at: key.to_string(),
                    found: json_type_name(&other),
                })
            }
        };
        let fields = build_fields(&raw);
        Ok(Resource { raw, warnings, fields })
    }

    /// Wrap a freshly decoded body, which must be a JSON object.
    pub fn from_value(value: Value) -> Result<Resource, ResourceError> {
        match value {
            Value::Object(map) => Ok(Resource::new(map)),
            other => Err(ResourceError::NotAnObject {
                at: String::new(),
                found: json_type_name(&other),
            }),
        }
    }

    /// Look up a field by name.
    ///
    /// Returns `None` when the field is absent from the response. A field
    /// present with an explicit JSON null comes back as
    /// `Some(&Field::Raw(Value::Null))`, so the two cases stay
    /// distinguishable.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// The unprocessed mapping this wrapper was built from. Children are the
    /// raw decoded values, not wrapped.
    pub fn data(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Warnings attached to the response, captured from the top level of the
    /// input at construction time.
    pub fn warnings(&self) -> Option<&[Value]> {
        self.warnings.as_deref()
    }

    /// Field names, in response order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn build_fields(raw: &Map<String, Value>) -> IndexMap<String, Field> {
    raw.iter()
        .map(|(name, value)| (name.clone(), Field::classify(value)))
        .collect()
}

// A non-array "warnings" value carries no warning entries; treat it as absent.
fn extract_warnings(map: &Map<String, Value>) -> Option<Vec<Value>> {
    match map.get("warnings") {
        Some(Value::Array(items)) => Some(items.clone()),
        _ => None,
    }
}
