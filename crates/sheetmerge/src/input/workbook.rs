//! Workbook (xlsx) ingestion via calamine.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use crate::error::{Result, SheetmergeError};

use super::source::Table;

/// Read the first worksheet of an xlsx byte-stream into a table.
///
/// The first row is the header row; everything below it is data. Only the
/// first sheet is consulted, multi-sheet workbooks are not supported.
pub(crate) fn read_workbook(bytes: &[u8]) -> Result<Table> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| SheetmergeError::EmptyData("workbook has no sheets".to_string()))?;

    let range = workbook.worksheet_range(&sheet_name)?;
    let mut rows = range.rows();

    let headers: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(cell_to_string).collect())
        .unwrap_or_default();
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(SheetmergeError::EmptyData(format!(
            "worksheet '{}' has no header row",
            sheet_name
        )));
    }

    let data_rows: Vec<Vec<String>> = rows
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Ok(Table::new(headers, data_rows))
}

/// Render a workbook cell as a string.
///
/// Floats with no fractional part render as integers so identifier-like
/// values survive the round-trip through a float cell.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 => (*f as i64).to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
        Data::Empty => String::new(),
    }
}
