//! Store errors

use thiserror::Error;

use crate::schema::ValidationError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the record store and the dataset loader
#[derive(Debug, Error)]
pub enum StoreError {
    /// Index past the end of the store
    #[error("Index {index} out of bounds for store of {len} records")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Two records share an id
    #[error("Duplicate movie id: {0}")]
    DuplicateId(String),

    /// Dataset is not a JSON array of movies
    #[error("Malformed dataset: {0}")]
    MalformedDataset(#[from] serde_json::Error),

    /// A dataset record fails the movie field checks
    #[error("Invalid record #{index} ({id}): {source}")]
    InvalidRecord {
        index: usize,
        id: String,
        #[source]
        source: ValidationError,
    },

    /// Dataset file could not be read
    #[error("Cannot read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
