//! Transform handler.

use axum::{extract::Multipart, response::Response};
use sheetmerge::{apply_matching, ingest_workbook, to_xlsx_bytes};

use super::response::xlsx_attachment;
use crate::server::error::ApiError;

/// Remap the uploaded input file into the base file's column layout, driven
/// by the uploaded header-matching file.
pub async fn transform_file(mut multipart: Multipart) -> Result<Response, ApiError> {
    let mut input_file = None;
    let mut base_file = None;
    let mut hm_file = None;
    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("input_file") => input_file = Some(field.bytes().await?),
            Some("base_file") => base_file = Some(field.bytes().await?),
            Some("hm_file") => hm_file = Some(field.bytes().await?),
            _ => {}
        }
    }

    let missing =
        || ApiError::BadRequest("Input, Base, and HM files are all required".to_string());
    let input_bytes = input_file.ok_or_else(missing)?;
    let base_bytes = base_file.ok_or_else(missing)?;
    let hm_bytes = hm_file.ok_or_else(missing)?;

    let input = ingest_workbook(&input_bytes)?;
    let base = ingest_workbook(&base_bytes)?;
    let hm = ingest_workbook(&hm_bytes)?;

    let transformed = apply_matching(&input, &base, &hm);
    Ok(xlsx_attachment(
        "Transformed_File.xlsx",
        to_xlsx_bytes(&transformed)?,
    ))
}
