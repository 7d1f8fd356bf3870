//! Header-matching generation handler.

use axum::{extract::Multipart, response::Response};
use sheetmerge::{generate_matching, ingest_workbook, to_xlsx_bytes};

use super::response::xlsx_attachment;
use crate::server::error::ApiError;

/// Generate a header-matching worksheet from an input/base upload pair.
pub async fn generate_matching_file(mut multipart: Multipart) -> Result<Response, ApiError> {
    let mut input_file = None;
    let mut base_file = None;
    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("input_file") => input_file = Some(field.bytes().await?),
            Some("base_file") => base_file = Some(field.bytes().await?),
            _ => {}
        }
    }

    let missing = || {
        ApiError::BadRequest("Both Input File and Base Structure File are required".to_string())
    };
    let input_bytes = input_file.ok_or_else(missing)?;
    let base_bytes = base_file.ok_or_else(missing)?;

    let input = ingest_workbook(&input_bytes)?;
    let base = ingest_workbook(&base_bytes)?;

    let hm = generate_matching(&input, &base);
    Ok(xlsx_attachment(
        "Header_Matching_File.xlsx",
        to_xlsx_bytes(&hm)?,
    ))
}
