//! Sheetmerge: column-union merging and header-matching transforms for
//! spreadsheet data.
//!
//! The library works on a single uniform representation: a [`Table`] of
//! string cells. Uploaded byte-streams are ingested into tables, tables are
//! combined or reshaped by the three core operations, and the result is
//! serialized back to a workbook.
//!
//! # Operations
//!
//! - **Column-union merge** ([`merge_tables`]): stack any number of tables
//!   row-wise, reconciling differing column sets deterministically.
//! - **Header matching** ([`generate_matching`]): record how one table's
//!   headers line up against a base layout, as an editable worksheet.
//! - **Transform** ([`apply_matching`]): remap a table into a base layout,
//!   driven by the directives in a header-matching worksheet.
//!
//! # Example
//!
//! ```
//! use sheetmerge::{merge_tables, Table};
//!
//! let first = Table::from_columns(vec![
//!     ("id".to_string(), vec!["1".to_string(), "2".to_string()]),
//!     ("name".to_string(), vec!["Alice".to_string(), "Bob".to_string()]),
//! ]);
//! let second = Table::from_columns(vec![
//!     ("name".to_string(), vec!["Carol".to_string()]),
//!     ("city".to_string(), vec!["Oslo".to_string()]),
//! ]);
//!
//! let merged = merge_tables(vec![first, second]).unwrap();
//! assert_eq!(merged.headers, ["id", "name", "city"]);
//! assert_eq!(merged.row_count(), 3);
//! assert_eq!(merged.get(2, 0), Some(""));
//! ```

pub mod error;
pub mod export;
pub mod input;
pub mod matching;
pub mod merge;
pub mod transform;

pub use error::{Result, SheetmergeError};
pub use export::to_xlsx_bytes;
pub use input::{
    Parser, ParserConfig, SourceMetadata, Table, ingest_any, ingest_path, ingest_workbook,
};
pub use matching::{
    BASE_HEADER_COLUMN, Directive, MATCHED_INPUT_COLUMN, UNMATCHED_INPUT_COLUMN,
    generate_matching,
};
pub use merge::merge_tables;
pub use transform::apply_matching;
