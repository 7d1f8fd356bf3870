//! Sheetmerge CLI - merge spreadsheets and remap them between column layouts.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port } => commands::serve::run(port),

        Commands::Merge { files, output } => commands::merge::run(files, output, cli.verbose),

        Commands::Match {
            input_file,
            base_file,
            output,
        } => commands::matching::run(input_file, base_file, output, cli.verbose),

        Commands::Transform {
            input_file,
            base_file,
            hm_file,
            output,
        } => commands::transform::run(input_file, base_file, hm_file, output, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
