//! json-resource — generic wrapper over parsed JSON API responses.
//!
//! Turns a decoded response body (a [`serde_json::Map`]) into a [`Resource`]
//! with named-field access, recursively wrapping nested objects and
//! arrays-of-objects in the same type. This is the base layer typed resource
//! types in an API client build their convenience accessors on.
//!
//! ```
//! use json_resource::{Field, Resource};
//! use serde_json::json;
//!
//! let body = json!({
//!     "account": {"email_address": "me@example.com"},
//!     "warnings": [{"warning_msg": "deprecated", "warning_name": "old_param"}],
//! });
//! let resource = Resource::scoped(body.as_object().unwrap().clone(), "account").unwrap();
//! let email = resource.get("email_address").and_then(Field::as_raw);
//! assert_eq!(email, Some(&json!("me@example.com")));
//! assert_eq!(resource.warnings().map(<[_]>::len), Some(1));
//! ```

mod error;
mod field;
mod resource;

pub use error::ResourceError;
pub use field::Field;
pub use resource::Resource;
