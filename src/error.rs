//! Error handling for sheet2sql
//!
//! This module defines the error type shared by the sheet reader, the type
//! inferencer and the script generator. Input-shape errors are the only kind
//! the conversion core raises; the rest come from the plumbing around it
//! (file I/O, delimited parsing, base64 decoding, script validation).
//!
//! The module uses thiserror to keep the variants declarative.

use thiserror::Error;

/// SheetError represents all possible errors that can occur in sheet2sql
///
/// Per-value parse failures during type inference are not errors: they
/// route a column to a wider type and never surface here.
#[derive(Error, Debug)]
pub enum SheetError {
    /// The table has no columns, so no CREATE TABLE can be produced
    #[error("Input error: table has no columns")]
    NoColumns,

    /// A row does not carry exactly one cell per column
    #[error("Input error: row {row} has {found} values, expected {expected}")]
    RowLength {
        /// 1-based data row number (header excluded)
        row: usize,
        /// Number of columns in the table
        expected: usize,
        /// Number of cells actually present in the row
        found: usize,
    },

    /// Two header cells resolve to the same column name
    #[error("Input error: duplicate column name '{0}'")]
    DuplicateColumn(String),

    /// Error during file system operations (reading input, writing output)
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error while parsing delimiter-separated sheet data
    #[error("File parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// The input payload could not be used (empty upload, bad base64, bad delimiter)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The generated script was rejected by the SQL parser
    #[error("SQL validation error: {0}")]
    SqlParseError(#[from] sqlparser::parser::ParserError),

    /// Error while serializing the inferred schema
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl SheetError {
    /// Whether this error describes malformed table input rather than a plumbing failure
    pub fn is_input_shape(&self) -> bool {
        matches!(
            self,
            SheetError::NoColumns | SheetError::RowLength { .. } | SheetError::DuplicateColumn(_)
        )
    }
}

/// Result type alias for operations that can produce a SheetError
pub type SheetResult<T> = std::result::Result<T, SheetError>;
