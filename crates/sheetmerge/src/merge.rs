//! Column-union merging of heterogeneous tables.

use indexmap::IndexSet;

use crate::error::{Result, SheetmergeError};
use crate::input::Table;

/// Merge tables by stacking their rows under the union of their columns.
///
/// The output column order is the first table's headers followed by any
/// header newly encountered in a later table, in first-seen order. Cells a
/// source table lacks come out as empty strings; the result never carries a
/// null marker of any kind. Row order is table order, then row order within
/// each table.
pub fn merge_tables(tables: Vec<Table>) -> Result<Table> {
    if tables.is_empty() {
        return Err(SheetmergeError::NoInput);
    }

    // Seeding with the first table's headers and inserting in scan order
    // gives exactly "base columns, then first-seen extras".
    let mut order: IndexSet<String> = IndexSet::new();
    for table in &tables {
        for header in &table.headers {
            order.insert(header.clone());
        }
    }
    let final_columns: Vec<String> = order.into_iter().collect();

    let total_rows = tables.iter().map(Table::row_count).sum();
    let mut rows = Vec::with_capacity(total_rows);
    for table in &tables {
        rows.extend(table.reindex(&final_columns).rows);
    }

    Ok(Table::new(final_columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::new(
            headers.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_merge_column_order_base_then_extras() {
        let f1 = table(&["A", "B"], &[&["a1", "b1"]]);
        let f2 = table(&["B", "C"], &[&["b2", "c2"]]);

        let merged = merge_tables(vec![f1, f2]).unwrap();
        assert_eq!(merged.headers, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_merge_extras_keep_first_seen_order() {
        let f1 = table(&["A"], &[]);
        let f2 = table(&["D", "C"], &[]);
        let f3 = table(&["C", "E", "A"], &[]);

        let merged = merge_tables(vec![f1, f2, f3]).unwrap();
        assert_eq!(merged.headers, vec!["A", "D", "C", "E"]);
    }

    #[test]
    fn test_merge_blank_fills_missing_cells() {
        let f1 = table(&["A", "B"], &[&["a1", "b1"]]);
        let f2 = table(&["B", "C"], &[&["b2", "c2"]]);

        let merged = merge_tables(vec![f1, f2]).unwrap();
        // First file has no C, second has no A.
        assert_eq!(merged.rows[0], vec!["a1", "b1", ""]);
        assert_eq!(merged.rows[1], vec!["", "b2", "c2"]);
    }

    #[test]
    fn test_merge_row_count_is_sum() {
        let f1 = table(&["A"], &[&["1"], &["2"]]);
        let f2 = table(&["A"], &[&["3"]]);
        let f3 = table(&["B"], &[&["4"], &["5"], &["6"]]);

        let merged = merge_tables(vec![f1, f2, f3]).unwrap();
        assert_eq!(merged.row_count(), 6);
    }

    #[test]
    fn test_merge_rows_stack_in_upload_order() {
        let f1 = table(&["A"], &[&["1"], &["2"]]);
        let f2 = table(&["A"], &[&["3"]]);

        let merged = merge_tables(vec![f1, f2]).unwrap();
        let column: Vec<&str> = merged.column_values(0).collect();
        assert_eq!(column, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_merge_no_input_is_an_error() {
        assert!(matches!(
            merge_tables(Vec::new()),
            Err(SheetmergeError::NoInput)
        ));
    }

    #[test]
    fn test_merge_single_table_is_identity() {
        let f1 = table(&["A", "B"], &[&["1", "2"]]);
        let merged = merge_tables(vec![f1.clone()]).unwrap();
        assert_eq!(merged, f1);
    }

    #[test]
    fn test_merge_zero_row_inputs() {
        let f1 = table(&["A"], &[]);
        let f2 = table(&["B"], &[&["x"]]);

        let merged = merge_tables(vec![f1, f2]).unwrap();
        assert_eq!(merged.headers, vec!["A", "B"]);
        assert_eq!(merged.row_count(), 1);
        assert_eq!(merged.rows[0], vec!["", "x"]);
    }
}
