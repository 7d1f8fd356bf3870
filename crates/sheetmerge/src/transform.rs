//! Reshaping an input table into a base column layout.

use indexmap::IndexMap;

use crate::input::Table;
use crate::matching::{BASE_HEADER_COLUMN, Directive, MATCHED_INPUT_COLUMN};

/// Apply a header-matching table to `input`, producing a table shaped
/// exactly like `base`'s headers with `input`'s row count.
///
/// Matching rows are applied in order; a later row naming the same base
/// header overwrites the earlier one. Rows whose `Base Header` cell is
/// blank after trimming are skipped. Base headers no surviving row assigned
/// come out as all-blank columns, and assignments under headers outside the
/// base layout are dropped — the base file alone decides the final shape.
pub fn apply_matching(input: &Table, base: &Table, hm: &Table) -> Table {
    let row_count = input.row_count();
    let base_index = hm.column_index(BASE_HEADER_COLUMN);
    let matched_index = hm.column_index(MATCHED_INPUT_COLUMN);

    // Named-column arena; a missing hm column behaves as all-empty cells.
    let mut assigned: IndexMap<String, Vec<String>> = IndexMap::new();
    for row in &hm.rows {
        let cell = |index: Option<usize>| {
            index
                .and_then(|i| row.get(i))
                .map(String::as_str)
                .unwrap_or("")
        };

        let base_header = cell(base_index).trim();
        if base_header.is_empty() {
            continue;
        }

        let values = match Directive::classify(cell(matched_index), input) {
            Directive::Column(name) => input
                .column_by_name(&name)
                .map(|column| column.into_iter().map(str::to_string).collect())
                .unwrap_or_else(|| vec![String::new(); row_count]),
            Directive::Literal(value) => vec![value; row_count],
            Directive::Blank => vec![String::new(); row_count],
        };
        assigned.insert(base_header.to_string(), values);
    }

    let columns = base
        .headers
        .iter()
        .map(|header| {
            let values = assigned
                .shift_remove(header)
                .unwrap_or_else(|| vec![String::new(); row_count]);
            (header.clone(), values)
        })
        .collect();

    Table::from_columns(columns)
}
