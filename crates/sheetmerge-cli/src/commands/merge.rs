//! Merge command - column-union merge of local files.

use std::path::PathBuf;

use colored::Colorize;
use sheetmerge::{ingest_path, merge_tables, to_xlsx_bytes};

pub fn run(
    files: Vec<PathBuf>,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut tables = Vec::with_capacity(files.len());
    for path in &files {
        let (table, metadata) = ingest_path(path)?;
        if verbose {
            println!(
                "  {} {} ({} rows x {} columns, {})",
                "Read".cyan(),
                metadata.file,
                metadata.row_count,
                metadata.column_count,
                metadata.format
            );
        }
        tables.push(table);
    }

    let merged = merge_tables(tables)?;
    let output = output.unwrap_or_else(|| PathBuf::from("merged.xlsx"));
    std::fs::write(&output, to_xlsx_bytes(&merged)?)?;

    println!(
        "{} {} file(s) into {} ({} rows x {} columns)",
        "Merged".cyan().bold(),
        files.len(),
        output.display().to_string().white().bold(),
        merged.row_count(),
        merged.column_count()
    );

    Ok(())
}
