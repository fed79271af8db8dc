//! Error types for the rowsort crate.

use thiserror::Error;

/// Errors that can occur when building sort keys or resolving headers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowSortError {
    /// A column name is not present in the header index.
    #[error("unknown column header: {name} (known: {})", .known.join(", "))]
    UnknownHeader {
        /// The name that was requested.
        name: String,
        /// Every name the index can resolve, sorted.
        known: Vec<String>,
    },

    /// Column keys are 1-based; zero addresses no column.
    #[error("column key 0 is invalid: keys are 1-based and signed for direction")]
    ZeroColumnKey,

    /// A sort was requested without any keys.
    #[error("sort spec must contain at least one column key")]
    EmptySortSpec,

    /// Textual key that is not a signed integer.
    #[error("invalid column key: {0:?}")]
    InvalidKey(String),
}

/// Result type for rowsort operations.
pub type Result<T> = std::result::Result<T, RowSortError>;
