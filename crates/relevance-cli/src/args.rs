//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use relevance_core::batch::BatchMode;
use relevance_core::evaluator::Transport;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "evaluate-relevance")]
#[command(about = "Evaluate relevance expressions with the QnA evaluator")]
#[command(
    long_about = r#"Evaluate relevance expressions with the QnA evaluator

USAGE:
  evaluate-relevance "version of client"       # Evaluate a query
  evaluate-relevance "Q: version of client"    # Leading Q: is optional
  evaluate-relevance relevance_tmp.txt         # Evaluate a prepared query file
  evaluate-relevance --each "TRUE" "FALSE"     # One query per argument, concurrently
  evaluate-relevance                           # relevance_tmp.txt if present, else a placeholder

Must be run as root or with sudo on macOS."#
)]
#[command(version)]
pub struct Cli {
    /// Query text (words are joined with spaces) or the path of a query file
    pub relevance: Vec<String>,

    /// Evaluate each argument as its own query, concurrently
    #[arg(long)]
    pub each: bool,

    /// How to print results
    #[arg(long, value_enum, default_value = "raw")]
    pub format: OutputFormat,

    /// How the query reaches the evaluator (overrides config)
    #[arg(long, value_enum)]
    pub transport: Option<TransportArg>,

    /// Evaluation timeout in seconds (overrides config)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Path to the QnA binary (overrides config and discovery)
    #[arg(long)]
    pub qna_path: Option<PathBuf>,

    /// Path to a JSON configuration file
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Maximum concurrent evaluator processes with --each
    #[arg(long)]
    pub max_concurrency: Option<usize>,

    /// Write relevance_out.txt and relevance_str.txt after a single evaluation
    #[arg(long, conflicts_with = "each")]
    pub write_notes: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// All positional words as one query
    pub fn joined_relevance(&self) -> String {
        self.relevance.join(" ")
    }
}

/// Result presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Evaluator output with timing trailer
    #[default]
    Raw,
    /// Parsed answers as a JSON array
    Array,
    /// Parsed answers, one per line
    Joined,
}

impl OutputFormat {
    pub fn batch_mode(self) -> BatchMode {
        match self {
            OutputFormat::Joined => BatchMode::Joined,
            OutputFormat::Raw | OutputFormat::Array => BatchMode::Array,
        }
    }
}

/// Transport selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransportArg {
    /// Write the query to the evaluator's stdin
    Piped,
    /// Stage the query in a temporary file
    File,
}

impl From<TransportArg> for Transport {
    fn from(arg: TransportArg) -> Self {
        match arg {
            TransportArg::Piped => Transport::Piped,
            TransportArg::File => Transport::File,
        }
    }
}
