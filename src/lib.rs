//! Relevance evaluation through the QnA command-line evaluator
//!
//! ```no_run
//! use relevance::{BatchCoordinator, BatchMode, Evaluator, Query};
//!
//! # async fn demo() -> relevance::RelevanceResult<()> {
//! let answers = Evaluator::new()
//!     .evaluate_array(&Query::new("version of client"))
//!     .await?;
//! println!("{:?}", answers);
//!
//! let batch = BatchCoordinator::new(Evaluator::new())
//!     .evaluate_many(["name of operating system", "Q: TRUE"], BatchMode::Array)
//!     .await?;
//! println!("{:?}", batch);
//! # Ok(())
//! # }
//! ```

pub use relevance_core::*;
