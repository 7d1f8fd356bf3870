//! Column-union merge handler.

use axum::{extract::Multipart, response::Response};
use sheetmerge::{ingest_any, merge_tables, to_xlsx_bytes};

use super::response::xlsx_attachment;
use crate::server::error::ApiError;

/// Merge every uploaded `files` part into one spreadsheet.
///
/// Parts are merged in upload order; each may be a workbook or delimited
/// text.
pub async fn merge_files(mut multipart: Multipart) -> Result<Response, ApiError> {
    let mut uploads = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("files") {
            uploads.push(field.bytes().await?);
        }
    }

    if uploads.is_empty() {
        return Err(ApiError::BadRequest("No files uploaded".to_string()));
    }

    let mut tables = Vec::with_capacity(uploads.len());
    for data in &uploads {
        tables.push(ingest_any(data)?);
    }

    let merged = merge_tables(tables)?;
    Ok(xlsx_attachment("merged.xlsx", to_xlsx_bytes(&merged)?))
}
