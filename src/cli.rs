//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Order of service converter
///
/// Turns a service bulletin (plain text or .docx) into the YAML slide order
/// used by the presentation builder.
#[derive(Parser, Debug)]
#[command(name = "orderflow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert bulletins to slide-order YAML files
    Convert {
        /// Files or directories (.txt and .docx are picked up from directories)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory (default from ORDERFLOW_OUTPUT_DIR or ./service_orders)
        #[arg(short, long)]
        output_dir: Option<String>,

        /// Print the YAML instead of writing files
        #[arg(long)]
        stdout: bool,
    },

    /// Show how a bulletin is segmented and classified
    Inspect {
        /// Bulletin to parse
        input: PathBuf,

        /// Print the parsed document as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load a slide-order YAML file and summarize it
    Check {
        /// Interchange document to read
        file: PathBuf,
    },
}
