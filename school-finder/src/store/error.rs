//! Storage error types.

/// Errors that can occur when loading or querying institution data.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading the dataset failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON or has invalid records
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    /// Two records share an id
    #[error("duplicate institution id {0}")]
    DuplicateId(u64),
}
