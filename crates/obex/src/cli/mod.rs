pub mod countries;
pub mod extract;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "obex",
    about = "WHO AFRO outbreak bulletin extractor",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the outbreak table from a bulletin
    Extract {
        /// Bulletin URL, PDF path, or pre-extracted text path
        #[arg(env = "WHO_REPORT")]
        report: String,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value = "csv")]
        format: Format,
        /// Path to the pdftotext binary (searched on PATH if omitted)
        #[arg(long)]
        pdftotext: Option<PathBuf>,
    },
    /// List the built-in country dictionary
    Countries,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Json,
}
