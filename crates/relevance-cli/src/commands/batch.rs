//! Concurrent evaluation of one query per argument

use anyhow::Result;
use relevance_core::{BatchCoordinator, EvaluatorConfig};

use crate::args::Cli;

/// Note files are only written for single evaluations
pub async fn run(cli: &Cli, config: &EvaluatorConfig) -> Result<()> {
    if config.write_notes {
        tracing::warn!("write_notes is ignored with --each");
    }

    let coordinator = BatchCoordinator::from_config(config)?;
    let results = coordinator
        .evaluate_many(cli.relevance.iter(), cli.format.batch_mode())
        .await?;

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
