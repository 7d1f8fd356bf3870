//! Header-matching worksheet: schema, generation, and directives.
//!
//! A header-matching table is the editable contract between the generator
//! and the transform applier: one row per base header (plus overflow rows
//! for unmatched input headers), recording which input column supplies each
//! output column, or a quoted literal, or nothing.

use crate::input::Table;

/// Column holding the base layout's headers.
pub const BASE_HEADER_COLUMN: &str = "Base Header";
/// Column holding the input header matched to the base header, if any.
pub const MATCHED_INPUT_COLUMN: &str = "Matched Input Header";
/// Column listing input headers with no base counterpart.
pub const UNMATCHED_INPUT_COLUMN: &str = "Unmatched Input Headers";

/// Build the header-matching table for an input/base pair.
///
/// `Matched Input Header` row `i` is `base.headers[i]` when that exact
/// string occurs anywhere in the input's headers, else blank. The three
/// columns are independently padded lists sharing a row index for display
/// only; row `k` of `Unmatched Input Headers` is unrelated to row `k` of
/// the other two.
pub fn generate_matching(input: &Table, base: &Table) -> Table {
    let matched: Vec<String> = base
        .headers
        .iter()
        .map(|header| {
            if input.headers.contains(header) {
                header.clone()
            } else {
                String::new()
            }
        })
        .collect();

    let unmatched: Vec<String> = input
        .headers
        .iter()
        .filter(|header| !base.headers.contains(header))
        .cloned()
        .collect();

    // from_columns pads every list with empty strings up to
    // max(len(base), len(unmatched)).
    Table::from_columns(vec![
        (BASE_HEADER_COLUMN.to_string(), base.headers.clone()),
        (MATCHED_INPUT_COLUMN.to_string(), matched),
        (UNMATCHED_INPUT_COLUMN.to_string(), unmatched),
    ])
}

/// The resolved meaning of a `Matched Input Header` cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Copy the named input column.
    Column(String),
    /// Repeat a constant for every output row.
    Literal(String),
    /// Emit an all-blank column.
    Blank,
}

impl Directive {
    /// Classify a matched-input cell against the input table's columns.
    ///
    /// The column-set check runs before the quoted-literal check, so an
    /// input column whose name itself carries surrounding quotes still
    /// resolves as a column reference. Empty cells, any casing of "nan",
    /// and every unrecognized value degrade to [`Directive::Blank`] rather
    /// than erroring.
    pub fn classify(cell: &str, input: &Table) -> Directive {
        let cell = cell.trim();
        if input.column_index(cell).is_some() {
            Directive::Column(cell.to_string())
        } else if cell.starts_with('"') && cell.ends_with('"') {
            Directive::Literal(cell.trim_matches('"').to_string())
        } else {
            Directive::Blank
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_only(headers: &[&str]) -> Table {
        Table::new(headers.iter().map(|s| s.to_string()).collect(), Vec::new())
    }

    fn column(table: &Table, name: &str) -> Vec<String> {
        table
            .column_by_name(name)
            .unwrap()
            .into_iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_generate_matching_aligns_to_base() {
        let input = headers_only(&["Y", "Z", "W"]);
        let base = headers_only(&["X", "Y", "Z"]);

        let hm = generate_matching(&input, &base);
        assert_eq!(hm.headers, vec![
            BASE_HEADER_COLUMN,
            MATCHED_INPUT_COLUMN,
            UNMATCHED_INPUT_COLUMN,
        ]);
        assert_eq!(hm.row_count(), 3);
        assert_eq!(column(&hm, BASE_HEADER_COLUMN), vec!["X", "Y", "Z"]);
        assert_eq!(column(&hm, MATCHED_INPUT_COLUMN), vec!["", "Y", "Z"]);
        assert!(column(&hm, UNMATCHED_INPUT_COLUMN).contains(&"W".to_string()));
    }

    #[test]
    fn test_generate_matching_pads_to_unmatched_length() {
        let input = headers_only(&["a", "b", "c", "d"]);
        let base = headers_only(&["x"]);

        let hm = generate_matching(&input, &base);
        assert_eq!(hm.row_count(), 4);
        assert_eq!(column(&hm, BASE_HEADER_COLUMN), vec!["x", "", "", ""]);
        assert_eq!(
            column(&hm, UNMATCHED_INPUT_COLUMN),
            vec!["a", "b", "c", "d"]
        );
    }

    #[test]
    fn test_generate_matching_is_case_sensitive() {
        let input = headers_only(&["name"]);
        let base = headers_only(&["Name"]);

        let hm = generate_matching(&input, &base);
        assert_eq!(column(&hm, MATCHED_INPUT_COLUMN), vec![""]);
        assert_eq!(column(&hm, UNMATCHED_INPUT_COLUMN), vec!["name"]);
    }

    #[test]
    fn test_classify_column_reference() {
        let input = headers_only(&["FullName", "Age"]);
        assert_eq!(
            Directive::classify("FullName", &input),
            Directive::Column("FullName".to_string())
        );
        assert_eq!(
            Directive::classify("  Age  ", &input),
            Directive::Column("Age".to_string())
        );
    }

    #[test]
    fn test_classify_literal() {
        let input = headers_only(&["A"]);
        assert_eq!(
            Directive::classify("\"Active\"", &input),
            Directive::Literal("Active".to_string())
        );
        assert_eq!(
            Directive::classify("\"\"", &input),
            Directive::Literal(String::new())
        );
    }

    #[test]
    fn test_classify_column_wins_over_literal_form() {
        let input = headers_only(&["\"Status\""]);
        assert_eq!(
            Directive::classify("\"Status\"", &input),
            Directive::Column("\"Status\"".to_string())
        );
    }

    #[test]
    fn test_classify_blank_fallbacks() {
        let input = headers_only(&["A"]);
        assert_eq!(Directive::classify("", &input), Directive::Blank);
        assert_eq!(Directive::classify("   ", &input), Directive::Blank);
        assert_eq!(Directive::classify("nan", &input), Directive::Blank);
        assert_eq!(Directive::classify("NaN", &input), Directive::Blank);
        assert_eq!(Directive::classify("NAN", &input), Directive::Blank);
        assert_eq!(Directive::classify("no-such-column", &input), Directive::Blank);
    }
}
