//! Property-based tests for the core table operations.
//!
//! These use proptest to generate random tables and verify that the
//! operations maintain their invariants under all conditions:
//!
//! 1. **No panics**: operations never crash on any input
//! 2. **Shape**: output row/column counts follow the documented rules
//! 3. **Order**: merged column order is base-first, then first-seen extras

use proptest::prelude::*;

use sheetmerge::{Directive, Table, apply_matching, generate_matching, merge_tables};

/// Generate a table with 1-5 unique headers and 0-7 rows.
fn arb_table() -> impl Strategy<Value = Table> {
    prop::collection::hash_set("[a-z]{1,6}", 1..6).prop_flat_map(|headers| {
        let headers: Vec<String> = headers.into_iter().collect();
        let width = headers.len();
        prop::collection::vec(
            prop::collection::vec("[a-zA-Z0-9 ]{0,6}", width..=width),
            0..8,
        )
        .prop_map(move |rows| Table::new(headers.clone(), rows))
    })
}

proptest! {
    /// Merged row count is always the sum of the input row counts, and the
    /// merged header list starts with the first table's headers, covers
    /// every input header, and carries no duplicates.
    #[test]
    fn merge_row_count_and_header_union(tables in prop::collection::vec(arb_table(), 1..5)) {
        let expected_rows: usize = tables.iter().map(Table::row_count).sum();

        let merged = merge_tables(tables.clone()).unwrap();

        prop_assert_eq!(merged.row_count(), expected_rows);
        prop_assert!(merged.headers.starts_with(&tables[0].headers));
        for table in &tables {
            for header in &table.headers {
                prop_assert!(merged.headers.contains(header));
            }
        }
        let unique: std::collections::HashSet<&String> = merged.headers.iter().collect();
        prop_assert_eq!(unique.len(), merged.headers.len());
    }

    /// Every merged row has exactly one cell per merged column.
    #[test]
    fn merge_rows_are_rectangular(tables in prop::collection::vec(arb_table(), 1..5)) {
        let merged = merge_tables(tables).unwrap();
        let width = merged.column_count();
        for row in &merged.rows {
            prop_assert_eq!(row.len(), width);
        }
    }

    /// The generator emits exactly max(base headers, unmatched input
    /// headers) rows, three columns, all padded to equal length.
    #[test]
    fn generator_row_count_is_max(input in arb_table(), base in arb_table()) {
        let unmatched = input
            .headers
            .iter()
            .filter(|h| !base.headers.contains(h))
            .count();

        let hm = generate_matching(&input, &base);

        prop_assert_eq!(hm.column_count(), 3);
        prop_assert_eq!(hm.row_count(), base.headers.len().max(unmatched));
    }

    /// The applier's output shape is fixed by the base headers and the
    /// input row count, whatever the matching table holds.
    #[test]
    fn transform_output_shape_is_fixed(
        input in arb_table(),
        base in arb_table(),
        hm in arb_table(),
    ) {
        let out = apply_matching(&input, &base, &hm);
        prop_assert_eq!(&out.headers, &base.headers);
        prop_assert_eq!(out.row_count(), input.row_count());
    }

    /// Classification is total: any cell resolves to a directive without
    /// panicking, and whitespace-only cells are always Blank.
    #[test]
    fn classify_is_total(cell in "\\PC{0,20}") {
        let input = Table::new(vec!["col".to_string()], Vec::new());
        let directive = Directive::classify(&cell, &input);
        if cell.trim().is_empty() {
            prop_assert_eq!(directive, Directive::Blank);
        }
    }
}
