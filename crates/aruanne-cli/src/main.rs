mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "aruanne",
    version,
    about = "Table extraction tool for financial statement PDFs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract all tables from a report and label each with its section heading
    Extract {
        /// Path to PDF file
        input_file: PathBuf,

        /// Directory to write one CSV per labeled table
        #[arg(short = 'd', long, default_value = "sheets")]
        out_dir: PathBuf,

        /// Output format for stdout: summary (default) or json
        #[arg(short, long, default_value = "summary")]
        output: String,

        /// Custom keyword config JSON
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Merge the target-keyword table from several reports into one CSV
    Merge {
        /// Input PDF files, in merge order
        input_files: Vec<PathBuf>,

        /// Write merged CSV to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Custom keyword config JSON
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Manage and inspect keyword configurations
    Keywords {
        #[command(subcommand)]
        action: KeywordsAction,
    },
}

#[derive(Subcommand)]
enum KeywordsAction {
    /// Show the built-in keyword configuration
    Show,
    /// Print the config JSON schema with field descriptions and example
    Schema,
    /// Validate a custom keyword config file
    Validate {
        /// Path to JSON config file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            out_dir,
            output,
            config,
        } => commands::extract::run(input_file, out_dir, &output, config),
        Commands::Merge {
            input_files,
            out,
            config,
        } => commands::merge::run(input_files, out, config),
        Commands::Keywords { action } => match action {
            KeywordsAction::Show => commands::keywords::show(),
            KeywordsAction::Schema => commands::keywords::schema(),
            KeywordsAction::Validate { file } => commands::keywords::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
