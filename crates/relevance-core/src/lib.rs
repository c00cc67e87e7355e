//! Relevance evaluation core
//!
//! Drives the BigFix QnA command-line evaluator: finds the binary, feeds it
//! queries over stdin or a staged file under a timeout, parses its tagged
//! output into answers and fans batches out across concurrent processes.

pub mod batch;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod locator;
pub mod notes;
pub mod parser;
pub mod privilege;
pub mod query;

#[cfg(all(test, unix))]
mod test_support;

// Re-export commonly used types
pub use batch::{BatchCoordinator, BatchMode, BatchResult};
pub use config::EvaluatorConfig;
pub use error::{RelevanceError, RelevanceResult};
pub use evaluator::{Evaluation, Evaluator, Transport};
pub use locator::{BinaryLocator, EvaluatorPath, locate};
pub use parser::{AnswerList, parse_answers};
pub use query::Query;
