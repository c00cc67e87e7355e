//! Error types for relevance evaluation
//!
//! Every failure the core can report is a variant of [`RelevanceError`]:
//! locating the evaluator, the privilege precondition, launching and waiting
//! on the evaluator process, batch preconditions, and temporary file I/O.

mod constructors;
mod conversions;
mod types;

pub use types::{RelevanceError, RelevanceResult};
