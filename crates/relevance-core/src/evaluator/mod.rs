//! Single relevance evaluation
//!
//! [`Evaluator`] runs one query through QnA using either transport:
//!
//! - [`Transport::Piped`]: `qna -t -showtypes` with the query on stdin
//! - [`Transport::File`]: the query is staged in a per-call temporary file
//!   and run as `qna -t -showtypes <file>`
//!
//! Both are bounded by the same timeout and produce the same [`Evaluation`].

mod annotate;
mod process;
mod types;


pub use annotate::{STRING_OPERATOR_ERROR, STRING_OPERATOR_NOTE, annotate, timing_trailer};
pub use process::EVALUATOR_FLAGS;
pub use types::{Evaluation, Transport};

use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tempfile::TempPath;
use tracing::{debug, info, instrument};

use crate::config::{EvaluatorConfig, timeouts};
use crate::error::{RelevanceError, RelevanceResult};
use crate::locator::{self, EvaluatorPath};
use crate::parser::AnswerList;
use crate::privilege;
use crate::query::Query;
use process::{ProcessOutput, QueryInput, run_evaluator};

/// Runs queries against the QnA evaluator
#[derive(Debug, Clone)]
pub struct Evaluator {
    path: Option<EvaluatorPath>,
    timeout: Duration,
    transport: Transport,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Piped transport, default timeout, evaluator located on first use
    pub fn new() -> Self {
        Self {
            path: None,
            timeout: timeouts::evaluation_timeout(),
            transport: Transport::default(),
        }
    }

    /// Build from configuration, validating an explicit `qna_path`
    pub fn from_config(config: &EvaluatorConfig) -> RelevanceResult<Self> {
        let path = config
            .qna_path
            .as_ref()
            .map(EvaluatorPath::new)
            .transpose()?;

        Ok(Self {
            path,
            timeout: config.timeout,
            transport: config.transport,
        })
    }

    pub fn with_path(mut self, path: EvaluatorPath) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    pub fn path(&self) -> Option<&EvaluatorPath> {
        self.path.as_ref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    /// The evaluator path, locating it if none was given
    pub fn resolve_path(&self) -> RelevanceResult<EvaluatorPath> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => locator::locate(),
        }
    }

    /// A copy with the evaluator path fixed, so later calls skip the search
    pub fn resolved(&self) -> RelevanceResult<Self> {
        Ok(self.clone().with_path(self.resolve_path()?))
    }

    /// Evaluate one query and return the annotated raw output
    #[instrument(skip(self), fields(transport = %self.transport))]
    pub async fn evaluate(&self, query: &Query) -> RelevanceResult<Evaluation> {
        privilege::ensure_permitted()?;
        let path = self.resolve_path()?;

        let output = match self.transport {
            Transport::Piped => {
                run_evaluator(path.as_path(), QueryInput::Stdin(query.payload()), self.timeout)
                    .await?
            }
            Transport::File => {
                let staged = stage_query(query)?;
                run_evaluator(path.as_path(), QueryInput::File(&staged), self.timeout).await?
                // dropping `staged` deletes the file on every path out of this arm
            }
        };

        Ok(finish(output))
    }

    /// Evaluate a query file the caller prepared, passing it through as is
    #[instrument(skip(self))]
    pub async fn evaluate_file(&self, query_file: &Path) -> RelevanceResult<Evaluation> {
        privilege::ensure_permitted()?;
        let path = self.resolve_path()?;

        if !query_file.is_file() {
            return Err(RelevanceError::io_with_path(query_file, "query file not found"));
        }

        let output = run_evaluator(path.as_path(), QueryInput::File(query_file), self.timeout).await?;
        Ok(finish(output))
    }

    /// Evaluate and return the parsed answers
    pub async fn evaluate_array(&self, query: &Query) -> RelevanceResult<AnswerList> {
        Ok(self.evaluate(query).await?.answers())
    }

    /// Evaluate and join the answers with `separator`
    pub async fn evaluate_string(&self, query: &Query, separator: &str) -> RelevanceResult<String> {
        Ok(self.evaluate(query).await?.joined(separator))
    }
}

fn finish(output: ProcessOutput) -> Evaluation {
    if !output.stderr.trim().is_empty() {
        debug!("Evaluator wrote to stderr: {}", output.stderr.trim());
    }
    info!("Evaluation finished in {:?}", output.elapsed);

    Evaluation {
        raw: annotate(&output.stdout, output.elapsed),
        stdout: output.stdout,
        stderr: output.stderr,
        elapsed: output.elapsed,
    }
}

/// Write the normalised query to a unique temporary file
fn stage_query(query: &Query) -> RelevanceResult<TempPath> {
    let mut file = tempfile::Builder::new()
        .prefix("relevance_")
        .suffix(".txt")
        .tempfile()
        .map_err(|e| RelevanceError::io(format!("Failed to create query file: {}", e)))?;

    let staged_path = file.path().to_path_buf();
    file.write_all(query.payload().as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| RelevanceError::io_with_path(&staged_path, e))?;

    Ok(file.into_temp_path())
}
