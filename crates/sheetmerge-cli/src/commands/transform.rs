//! Transform command - remap a local file into a base column layout.

use std::path::PathBuf;

use colored::Colorize;
use sheetmerge::{apply_matching, ingest_path, to_xlsx_bytes};

pub fn run(
    input_file: PathBuf,
    base_file: PathBuf,
    hm_file: PathBuf,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (input, input_meta) = ingest_path(&input_file)?;
    let (base, base_meta) = ingest_path(&base_file)?;
    let (hm, hm_meta) = ingest_path(&hm_file)?;

    if verbose {
        println!(
            "  {} input {} ({} rows), base {} ({} columns), matching {} ({} rows)",
            "Read".cyan(),
            input_meta.file,
            input_meta.row_count,
            base_meta.file,
            base_meta.column_count,
            hm_meta.file,
            hm_meta.row_count
        );
    }

    let transformed = apply_matching(&input, &base, &hm);
    let output = output.unwrap_or_else(|| PathBuf::from("Transformed_File.xlsx"));
    std::fs::write(&output, to_xlsx_bytes(&transformed)?)?;

    println!(
        "{} {} into {} ({} rows x {} columns)",
        "Transformed".cyan().bold(),
        input_file.display(),
        output.display().to_string().white().bold(),
        transformed.row_count(),
        transformed.column_count()
    );

    Ok(())
}
