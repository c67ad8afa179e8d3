//! Engine error types

use thiserror::Error;

use crate::records::RecordId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown game '{0}'")]
    UnknownGame(String),

    #[error("column {column} out of range (game has {columns} columns)")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("record {id} is not in the active dataset")]
    RecordNotActive { id: RecordId },

    #[error("unknown filter {key}={value}")]
    UnknownFilter { key: String, value: String },

    #[error("at most {max} filters may be active, got {got}")]
    TooManyFilters { max: usize, got: usize },
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u8),

    #[error("snapshot references unknown game '{0}'")]
    UnknownGame(String),

    #[error("snapshot is inconsistent: {0}")]
    Inconsistent(String),
}
