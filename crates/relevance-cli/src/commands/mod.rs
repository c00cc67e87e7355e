//! Command implementations

mod batch;
mod evaluate;
mod input;

use anyhow::{Context, Result};
use relevance_core::EvaluatorConfig;

use crate::args::Cli;

/// Load configuration, apply flag overrides and dispatch
pub async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    if cli.each && !cli.relevance.is_empty() {
        batch::run(&cli, &config).await
    } else {
        evaluate::run(&cli, &config).await
    }
}

fn load_config(cli: &Cli) -> Result<EvaluatorConfig> {
    let mut config = EvaluatorConfig::load(cli.config_file.as_deref())
        .context("Failed to load configuration")?;

    if let Some(path) = &cli.qna_path {
        config.qna_path = Some(path.clone());
    }
    if let Some(secs) = cli.timeout {
        config.timeout = std::time::Duration::from_secs(secs);
    }
    if let Some(transport) = cli.transport {
        config.transport = transport.into();
    }
    if let Some(limit) = cli.max_concurrency {
        config.max_concurrency = Some(limit);
    }
    if cli.write_notes {
        config.write_notes = true;
    }

    config.validate()?;
    Ok(config)
}
