use serde_json::Value;
use thiserror::Error;

/// Errors raised while constructing a [`crate::Resource`].
///
/// Field lookup never fails; every error here is local to construction and no
/// partially built wrapper is ever exposed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceError {
    #[error("missing key {0:?} in response object")]
    MissingKey(String),
    #[error("expected object at {at:?}, found {found}")]
    NotAnObject { at: String, found: &'static str },
}

/// JSON type name for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn messages_name_the_offender() {
        let missing = ResourceError::MissingKey("account".to_string());
        assert_eq!(missing.to_string(), "missing key \"account\" in response object");

        let wrong = ResourceError::NotAnObject {
            at: "account".to_string(),
            found: "string",
        };
        assert_eq!(wrong.to_string(), "expected object at \"account\", found string");
    }

    #[test]
    fn type_names_cover_every_variant() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!(1.5)), "number");
        assert_eq!(json_type_name(&json!("x")), "string");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }
}
