//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sheetmerge: spreadsheet merging and column-layout transforms
#[derive(Parser)]
#[command(name = "sheetmerge")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP upload service
    Serve {
        /// Port for the server (falls back to $PORT, then 5000)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Merge spreadsheets into one, reconciling differing column sets
    Merge {
        /// Files to merge, in order (xlsx or delimited text)
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,

        /// Output path (default: merged.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a header-matching worksheet for an input/base pair
    Match {
        /// Spreadsheet whose data will be remapped
        #[arg(value_name = "INPUT_FILE")]
        input_file: PathBuf,

        /// Spreadsheet defining the desired column layout
        #[arg(value_name = "BASE_FILE")]
        base_file: PathBuf,

        /// Output path (default: Header_Matching_File.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remap a spreadsheet into a base layout using a header-matching file
    Transform {
        /// Spreadsheet whose data will be remapped
        #[arg(value_name = "INPUT_FILE")]
        input_file: PathBuf,

        /// Spreadsheet defining the desired column layout
        #[arg(value_name = "BASE_FILE")]
        base_file: PathBuf,

        /// Header-matching worksheet from `match`, possibly hand-edited
        #[arg(value_name = "HM_FILE")]
        hm_file: PathBuf,

        /// Output path (default: Transformed_File.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
