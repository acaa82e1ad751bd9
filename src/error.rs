//! Error types for dataset loading and space construction.
//!
//! Query operations never produce these: an unknown entity name is a normal
//! outcome (`None`), and an out-of-range index is a caller contract violation
//! that panics. `RecError` covers the fallible surface — reading files,
//! parsing JSON, and validating the three inputs against each other.

use thiserror::Error;

/// Result type alias for loading and building operations.
pub type RecResult<T> = Result<T, RecError>;

/// Error type for everything that can fail before a `RecSpace` exists.
#[derive(Error, Debug)]
pub enum RecError {
    /// Reading a dataset file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A dataset file is not valid JSON or does not match the expected layout.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// An input matrix or entity list is empty.
    #[error("empty dataset: {0}")]
    EmptyDataset(&'static str),

    /// A matrix row does not match the width of the first row.
    #[error("ragged matrix: row {row} has {actual} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Row counts of the embeddings, projection, and entity list disagree.
    #[error("shape mismatch for {what}: expected {expected} rows, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The projection matrix is not three columns wide.
    #[error("projection must have 3 columns, got {actual}")]
    ProjectionWidth { actual: usize },

    /// Two entity names collapse to the same lowercase key.
    #[error("duplicate entity name (case-insensitive): {name}")]
    DuplicateEntity { name: String },

    /// The index→name dictionary skips an index in `[0, N)`.
    #[error("entity dictionary has no entry for index {index}")]
    IndexGap { index: usize },

    /// The forward and inverse entity dictionaries disagree.
    #[error("entity dictionaries disagree on {name:?}: forward index {forward}, inverse entry {inverse:?}")]
    EntityMapMismatch {
        name: String,
        forward: usize,
        inverse: Option<usize>,
    },
}
