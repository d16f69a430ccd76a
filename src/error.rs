//! Error types for rebuilding model values from plain JSON objects.

use thiserror::Error;

/// Result type for model reconstruction.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while turning plain objects into typed model values.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The `className` tag did not match any variant of the family.
    #[error("fromObject: object with className {class_name} not found ({family})")]
    ClassNotFound {
        /// Family being dispatched (query setting, condition, widget, ...).
        family: &'static str,
        /// The offending tag.
        class_name: String,
    },

    /// The object carries no string `className`.
    #[error("{0} object has no className")]
    MissingClassName(&'static str),

    /// The object matched a variant but its fields did not.
    #[error("invalid {family} object: {source}")]
    InvalidObject {
        family: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Raw input was not valid JSON.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    /// The offending tag, when this is a `ClassNotFound` error.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            ModelError::ClassNotFound { class_name, .. } => Some(class_name),
            _ => None,
        }
    }
}
