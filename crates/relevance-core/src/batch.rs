//! Concurrent evaluation of many queries
//!
//! Every query gets its own evaluator process on its own task. Results are
//! gathered into a slot per input position once all tasks have finished, so
//! completion order never affects result order.

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, info, instrument};

use crate::config::EvaluatorConfig;
use crate::error::{RelevanceError, RelevanceResult};
use crate::evaluator::Evaluator;
use crate::parser::AnswerList;
use crate::query::Query;

/// Shape of each batch entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchMode {
    /// The full answer list
    #[default]
    Array,
    /// Answers joined by newlines, wrapped in a one-element list
    Joined,
}

impl fmt::Display for BatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchMode::Array => write!(f, "array"),
            BatchMode::Joined => write!(f, "joined"),
        }
    }
}

impl FromStr for BatchMode {
    type Err = RelevanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "array" => Ok(BatchMode::Array),
            "joined" | "string" => Ok(BatchMode::Joined),
            other => Err(RelevanceError::config(format!(
                "Unknown batch mode '{}' (expected 'array' or 'joined')",
                other
            ))),
        }
    }
}

impl BatchMode {
    fn shape(self, answers: AnswerList) -> Vec<String> {
        match self {
            BatchMode::Array => answers,
            BatchMode::Joined => vec![answers.join("\n")],
        }
    }
}

/// One entry per input query, in input order
pub type BatchResult = Vec<Vec<String>>;

/// Fans queries out to concurrent evaluator runs
#[derive(Debug, Clone)]
pub struct BatchCoordinator {
    evaluator: Evaluator,
    max_concurrency: Option<usize>,
}

impl BatchCoordinator {
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            max_concurrency: None,
        }
    }

    pub fn from_config(config: &EvaluatorConfig) -> RelevanceResult<Self> {
        Ok(Self {
            evaluator: Evaluator::from_config(config)?,
            max_concurrency: config.max_concurrency,
        })
    }

    /// Cap the number of evaluator processes alive at once
    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = Some(limit.max(1));
        self
    }

    /// Evaluate every query; any failure fails the whole batch.
    ///
    /// All workers run to completion before the outcome is decided. The
    /// reported error is the one at the lowest input index, and no partial
    /// results are returned with it.
    #[instrument(skip(self, queries))]
    pub async fn evaluate_many<I, Q>(&self, queries: I, mode: BatchMode) -> RelevanceResult<BatchResult>
    where
        I: IntoIterator<Item = Q>,
        Q: Into<Query>,
    {
        let slots = self.evaluate_each(queries).await?;

        let mut results = Vec::with_capacity(slots.len());
        for slot in slots {
            results.push(mode.shape(slot?));
        }
        Ok(results)
    }

    /// Evaluate every query and keep each outcome, success or failure, at its
    /// input position.
    ///
    /// Only batch-level problems (an empty batch, no evaluator) fail the call
    /// itself.
    #[instrument(skip(self, queries))]
    pub async fn evaluate_each<I, Q>(&self, queries: I) -> RelevanceResult<Vec<RelevanceResult<AnswerList>>>
    where
        I: IntoIterator<Item = Q>,
        Q: Into<Query>,
    {
        let queries: Vec<Query> = queries.into_iter().map(Into::into).collect();
        if queries.is_empty() {
            return Err(RelevanceError::EmptyBatch);
        }

        // One search shared by every worker
        let evaluator = Arc::new(self.evaluator.resolved()?);
        let limiter = self.max_concurrency.map(|n| Arc::new(Semaphore::new(n)));
        let count = queries.len();
        debug!(count, limit = ?self.max_concurrency, "Starting batch");

        let handles: Vec<_> = queries
            .into_iter()
            .map(|query| {
                let evaluator = Arc::clone(&evaluator);
                let limiter = limiter.clone();
                tokio::spawn(async move {
                    let _permit = match limiter {
                        Some(limiter) => Some(
                            limiter
                                .acquire_owned()
                                .await
                                .map_err(|e| RelevanceError::Join(e.to_string()))?,
                        ),
                        None => None,
                    };
                    evaluator.evaluate_array(&query).await
                })
            })
            .collect();

        // join_all yields outcomes in spawn order, i.e. input order
        let slots: Vec<RelevanceResult<AnswerList>> = join_all(handles)
            .await
            .into_iter()
            .map(|joined| joined.map_err(RelevanceError::from).and_then(|outcome| outcome))
            .collect();

        let failed = slots.iter().filter(|slot| slot.is_err()).count();
        info!(count, failed, "Batch finished");
        Ok(slots)
    }
}
