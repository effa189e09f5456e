//! Error types for the list crate.

use thiserror::Error;

/// Caller errors raised when configuring a list pipeline.
///
/// Empty results and out-of-range pages are not errors; they yield empty
/// slices.
#[derive(Debug, Error)]
pub enum ListError {
    /// Page size must be at least 1.
    #[error("invalid page size {0}: must be a positive integer")]
    InvalidPageSize(usize),

    /// Pages are numbered from 1.
    #[error("invalid page {0}: pages are numbered from 1")]
    InvalidPage(usize),

    /// Sort or search field is not a field of the record type.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// Configuration text is not valid JSON for [`ListConfig`](crate::ListConfig).
    #[error("invalid JSON list config: {0}")]
    ConfigJson(#[from] serde_json::Error),

    /// Configuration text is not valid YAML for [`ListConfig`](crate::ListConfig).
    #[error("invalid YAML list config: {0}")]
    ConfigYaml(#[from] serde_yaml::Error),
}

/// Result type for list operations.
pub type Result<T> = std::result::Result<T, ListError>;
