//! Error types for table data.

use std::path::PathBuf;

/// Configuration errors in the supplied tables.
///
/// These mean the tables disagree with the die they are rolled with or
/// with each other. They are never retried.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// No entry in the table covers the rolled value.
    #[error("no entry in table '{table}' for roll {roll}; check table ranges")]
    NoMatchingEntry {
        /// Name of the table that was searched.
        table: String,
        /// The value that was rolled.
        roll: u32,
    },

    /// The router produced a category with no profession table.
    #[error("router roll mapped to '{0}', but no category table '{0}' exists")]
    MissingCategory(String),

    /// A table has no entries at all.
    #[error("table '{0}' is empty")]
    EmptyTable(String),

    /// A table file could not be read.
    #[error("cannot read tables from {path}: {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A table file is not valid table JSON.
    #[error("malformed table data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience result type for table operations.
pub type TableResult<T> = Result<T, TableError>;
