//! Helpers shared by the `from_object` constructors.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ModelError, ModelResult};

/// Key carrying the variant tag on every polymorphic object.
pub const CLASS_NAME: &str = "className";

/// Read the `className` tag of a plain object.
pub(crate) fn class_name(family: &'static str, obj: &Value) -> ModelResult<String> {
    obj.get(CLASS_NAME)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(ModelError::MissingClassName(family))
}

/// Deserialize a concrete variant, tagging failures with the family name.
pub(crate) fn decode<T: DeserializeOwned>(family: &'static str, obj: Value) -> ModelResult<T> {
    serde_json::from_value(obj).map_err(|source| ModelError::InvalidObject { family, source })
}

/// Build the `ClassNotFound` error for an unmatched tag.
pub(crate) fn not_found<T>(family: &'static str, class_name: String) -> ModelResult<T> {
    tracing::debug!(family, %class_name, "unknown className");
    Err(ModelError::ClassNotFound { family, class_name })
}
