//! Input ingestion: workbooks and delimited text.

mod ingest;
mod parser;
mod source;
mod workbook;

pub use ingest::{ingest_any, ingest_path, ingest_workbook};
pub use parser::{Parser, ParserConfig};
pub use source::{SourceMetadata, Table};
