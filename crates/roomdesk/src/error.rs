/// Errors reading or writing client-side storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A stored value is not the JSON it should be.
    #[error("Stored value under '{key}' is malformed: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Encoding a value for storage failed.
    #[error("Failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),

    /// The backing file could not be read or written.
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
