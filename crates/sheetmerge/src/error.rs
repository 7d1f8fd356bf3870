//! Error types for the sheetmerge library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sheetmerge operations.
#[derive(Debug, Error)]
pub enum SheetmergeError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error reading a workbook.
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::XlsxError),

    /// Error writing a workbook.
    #[error("workbook write error: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Byte-stream is neither a workbook nor delimited text.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Empty file or no data to work with.
    #[error("empty data: {0}")]
    EmptyData(String),

    /// A merge was requested with no input tables.
    #[error("no input tables to merge")]
    NoInput,
}

/// Result type alias for sheetmerge operations.
pub type Result<T> = std::result::Result<T, SheetmergeError>;
