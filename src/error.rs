/// DataTable Errors
///
/// The table engine itself is total; errors only arise at the edges where
/// records and datasets are built from outside data.

use thiserror::Error;

/// A record could not be built from a field map.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// The field map has no `id` entry.
    #[error("record has no `id` field")]
    MissingId,

    /// The `id` entry is not an integer.
    #[error("record `id` must be an integer, got {0:?}")]
    InvalidId(String),
}

/// A dataset could not be loaded or failed validation.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The record at `index` is malformed.
    #[error("record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: RecordError,
    },

    /// Two records share an id.
    #[error("duplicate record id {id} at positions {first} and {second}")]
    DuplicateId { id: i64, first: usize, second: usize },

    /// The input is not a JSON array of flat objects.
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
}
