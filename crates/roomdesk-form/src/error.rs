//! Error types for form records.

/// Errors building a form or converting its records.
///
/// Validation failures are not errors; they are reported through
/// [`Errors`](crate::Errors).
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// The record did not serialize to, or deserialize from, form values.
    #[error("Record conversion failed: {0}")]
    Record(#[from] serde_json::Error),

    /// The record is not a struct or map.
    #[error("Form record must be an object, got {0}.")]
    NotAnObject(&'static str),

    /// A pattern rule did not compile.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A field holds a nested object or array.
    #[error("Field '{0}' is not a scalar value.")]
    UnsupportedField(String),

    /// A numeric field holds an integer that a form number cannot represent
    /// exactly.
    #[error("Field '{0}' holds an integer too large to edit exactly.")]
    Inexact(String),
}

/// Result type for form record conversions.
pub type Result<T> = std::result::Result<T, FormError>;
