//! Byte-stream and file entry points for ingestion.

use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{Result, SheetmergeError};

use super::parser::{self, Parser, ParserConfig};
use super::source::{SourceMetadata, Table};
use super::workbook;

/// Ingest an xlsx byte-stream. Fails on anything that is not a workbook.
pub fn ingest_workbook(bytes: &[u8]) -> Result<Table> {
    workbook::read_workbook(bytes)
}

/// Ingest a byte-stream that may be a workbook or delimited text.
///
/// A workbook parse is attempted first; on failure the same bytes are
/// re-read as delimited text. If both fail the error names both causes.
pub fn ingest_any(bytes: &[u8]) -> Result<Table> {
    match workbook::read_workbook(bytes) {
        Ok(table) => Ok(table),
        Err(workbook_err) => Parser::new().parse_bytes(bytes).map_err(|text_err| {
            SheetmergeError::UnsupportedFormat(format!(
                "not a workbook ({}) and not delimited text ({})",
                workbook_err, text_err
            ))
        }),
    }
}

/// Ingest a file from disk, returning the table and its source metadata.
pub fn ingest_path(path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| SheetmergeError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let hash = format!("sha256:{:x}", hasher.finalize());

    let (table, format) = match workbook::read_workbook(&bytes) {
        Ok(table) => (table, "xlsx".to_string()),
        Err(_) => {
            let delimiter = parser::detect_delimiter(&bytes)?;
            let table = Parser::with_config(ParserConfig {
                delimiter: Some(delimiter),
                ..ParserConfig::default()
            })
            .parse_bytes(&bytes)?;
            (table, parser::format_name(delimiter).to_string())
        }
    };

    let file = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let metadata = SourceMetadata::new(
        file,
        hash,
        bytes.len() as u64,
        format,
        table.row_count(),
        table.column_count(),
    );

    Ok((table, metadata))
}
