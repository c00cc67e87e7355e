//! Optional write-back of evaluation output for later inspection

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{RelevanceError, RelevanceResult};
use crate::evaluator::Evaluation;

/// Raw output, trailer included
pub const RAW_NOTE_FILE: &str = "relevance_out.txt";

/// Parsed answers, one per line
pub const ANSWERS_NOTE_FILE: &str = "relevance_str.txt";

/// Write both note files into `dir`, returning their paths
pub async fn write_notes(dir: &Path, evaluation: &Evaluation) -> RelevanceResult<(PathBuf, PathBuf)> {
    let raw_path = dir.join(RAW_NOTE_FILE);
    let answers_path = dir.join(ANSWERS_NOTE_FILE);

    tokio::fs::write(&raw_path, &evaluation.raw)
        .await
        .map_err(|e| RelevanceError::io_with_path(&raw_path, e))?;
    tokio::fs::write(&answers_path, evaluation.joined("\n"))
        .await
        .map_err(|e| RelevanceError::io_with_path(&answers_path, e))?;

    debug!("Wrote evaluation notes to {}", dir.display());
    Ok((raw_path, answers_path))
}
