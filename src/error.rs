use std::io;
use thiserror::Error;

/// Error type for the bark bookmark manager
#[derive(Error, Debug)]
pub enum Error {
    /// A required bookmark field was empty or missing
    #[error("Bookmark field '{field}' must not be empty")]
    MissingField { field: &'static str },

    /// Delete was called without any criteria, which would wipe the table
    #[error("Refusing to delete from '{table}' without criteria")]
    EmptyCriteria { table: String },

    /// The requested sort column is not a bookmark column
    #[error("Invalid sort column: {column}")]
    InvalidSortColumn { column: String },

    /// A row came back from the store with an unexpected shape
    #[error("Malformed row in table '{table}'")]
    MalformedRow { table: String },

    /// Database error
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for bark operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn missing_field(field: &'static str) -> Self {
        Error::MissingField { field }
    }

    pub fn empty_criteria<S: Into<String>>(table: S) -> Self {
        Error::EmptyCriteria {
            table: table.into(),
        }
    }

    pub fn invalid_sort_column<S: Into<String>>(column: S) -> Self {
        Error::InvalidSortColumn {
            column: column.into(),
        }
    }

    pub fn malformed_row<S: Into<String>>(table: S) -> Self {
        Error::MalformedRow {
            table: table.into(),
        }
    }
}
