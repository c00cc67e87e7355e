//! Single evaluation command

use anyhow::Result;
use relevance_core::{Evaluation, Evaluator, EvaluatorConfig, notes};
use std::path::Path;

use super::input::{DEFAULT_INPUT_FILE, Input, select_input};
use crate::args::{Cli, OutputFormat};

pub async fn run(cli: &Cli, config: &EvaluatorConfig) -> Result<()> {
    let evaluator = Evaluator::from_config(config)?;

    let evaluation = match select_input(&cli.joined_relevance(), Path::new(DEFAULT_INPUT_FILE)) {
        Input::File(path) => {
            tracing::debug!("Evaluating query file {}", path.display());
            evaluator.evaluate_file(&path).await?
        }
        Input::Query(query) => {
            if !cli.relevance.is_empty() {
                println!(
                    "Note: this will not work on the command line directly in all cases. \
                     May require odd quote escaping."
                );
                println!("{}\n", query.marked());
            }
            evaluator.evaluate(&query).await?
        }
    };

    if evaluation.has_stderr() {
        eprintln!("Error: {}", evaluation.stderr.trim_end());
    }

    print_evaluation(&evaluation, cli.format)?;

    if config.write_notes {
        notes::write_notes(&config.notes_dir, &evaluation).await?;
    }
    Ok(())
}

fn print_evaluation(evaluation: &Evaluation, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Raw => println!("{}", evaluation.raw),
        OutputFormat::Array => println!("{}", serde_json::to_string_pretty(&evaluation.answers())?),
        OutputFormat::Joined => println!("{}", evaluation.joined("\n")),
    }
    Ok(())
}
