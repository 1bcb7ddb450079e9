use serde_json::Value;

use crate::Resource;

/// Classification of one response field, decided once at construction.
///
/// - objects become nested [`Resource`]s,
/// - non-empty arrays whose first element is an object become lists of
///   [`Resource`]s (such lists are assumed homogeneous),
/// - everything else (primitives, arrays of primitives, empty arrays, null)
///   is kept as the raw [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Resource(Resource),
    ResourceList(Vec<Resource>),
    Raw(Value),
}

impl Field {
    pub(crate) fn classify(value: &Value) -> Field {
        match value {
            Value::Object(map) => Field::Resource(Resource::new(map.clone())),
            Value::Array(items) if items.first().is_some_and(Value::is_object) => {
                // Assumed homogeneous; non-object stragglers are dropped.
                let wrapped = items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(|map| Resource::new(map.clone()))
                    .collect();
                Field::ResourceList(wrapped)
            }
            other => Field::Raw(other.clone()),
        }
    }

    /// The nested resource, if this field held an object.
    pub fn as_resource(&self) -> Option<&Resource> {
        match self {
            Field::Resource(resource) => Some(resource),
            _ => None,
        }
    }

    /// The wrapped elements, if this field held an array of objects.
    pub fn as_resource_list(&self) -> Option<&[Resource]> {
        match self {
            Field::ResourceList(list) => Some(list),
            _ => None,
        }
    }

    /// The unmodified value, if this field was left raw.
    pub fn as_raw(&self) -> Option<&Value> {
        match self {
            Field::Raw(value) => Some(value),
            _ => None,
        }
    }

    /// True for a field that was present with an explicit JSON null.
    pub fn is_null(&self) -> bool {
        matches!(self, Field::Raw(Value::Null))
    }
}
