//! Match command - generate a header-matching worksheet for local files.

use std::path::PathBuf;

use colored::Colorize;
use sheetmerge::{generate_matching, ingest_path, to_xlsx_bytes};

pub fn run(
    input_file: PathBuf,
    base_file: PathBuf,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (input, input_meta) = ingest_path(&input_file)?;
    let (base, base_meta) = ingest_path(&base_file)?;

    if verbose {
        println!(
            "  {} input {} ({} columns), base {} ({} columns)",
            "Read".cyan(),
            input_meta.file,
            input_meta.column_count,
            base_meta.file,
            base_meta.column_count
        );
    }

    let hm = generate_matching(&input, &base);
    let output = output.unwrap_or_else(|| PathBuf::from("Header_Matching_File.xlsx"));
    std::fs::write(&output, to_xlsx_bytes(&hm)?)?;

    println!(
        "{} header matching into {} ({} rows)",
        "Generated".cyan().bold(),
        output.display().to_string().white().bold(),
        hm.row_count()
    );
    println!(
        "Edit the {} column, then run {}",
        "Matched Input Header".white().bold(),
        format!(
            "sheetmerge transform {} {} {}",
            input_file.display(),
            base_file.display(),
            output.display()
        )
        .cyan()
    );

    Ok(())
}
