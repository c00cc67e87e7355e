//! QnA relevance evaluator CLI
//!
//! ```bash
//! evaluate-relevance "version of client"
//! evaluate-relevance "Q: version of client"
//! evaluate-relevance relevance_tmp.txt
//! evaluate-relevance --each "name of operating system" "version of client"
//! evaluate-relevance
//! ```
//!
//! On macOS the evaluator must run as root (use sudo).

mod args;
mod commands;

use args::Cli;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise warn, or debug with --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match commands::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
