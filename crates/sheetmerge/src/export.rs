//! Workbook serialization.

use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::input::Table;

/// Serialize a table to xlsx bytes.
///
/// One worksheet, a header row, then the data rows as plain strings. No
/// index column, no styling.
pub fn to_xlsx_bytes(table: &Table) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in table.headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, header)?;
    }
    for (row, cells) in table.rows.iter().enumerate() {
        for (col, value) in cells.iter().enumerate() {
            worksheet.write_string(row as u32 + 1, col as u16, value)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_produces_a_zip_container() {
        let table = Table::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec!["1".to_string(), "2".to_string()]],
        );
        let bytes = to_xlsx_bytes(&table).unwrap();
        // xlsx is a zip archive; check the magic instead of unpacking.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_export_empty_table() {
        let table = Table::new(vec!["only_header".to_string()], Vec::new());
        assert!(to_xlsx_bytes(&table).is_ok());
    }
}
