//! Core error type for relevance evaluation

use std::time::Duration;
use thiserror::Error;

/// Result type alias for relevance operations
pub type RelevanceResult<T> = Result<T, RelevanceError>;

/// Main error type for relevance evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelevanceError {
    /// No candidate path pointed at an executable evaluator
    #[error("Valid QNA path not found (searched: {})", .searched.join(", "))]
    BinaryNotFound { searched: Vec<String> },

    /// The current process lacks the privilege the evaluator needs
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The evaluator exists but the process could not be started
    #[error("Failed to launch evaluator '{path}': {message}")]
    Launch { path: String, message: String },

    /// The evaluator ran past the ceiling and was killed
    #[error("Evaluator timed out after {0:?}")]
    Timeout(Duration),

    /// The evaluator exited unsuccessfully
    #[error("Evaluator exited with {}{}", exit_label(.code), stderr_suffix(.stderr))]
    ProcessExit { code: Option<i32>, stderr: String },

    /// A batch was requested with no queries
    #[error("Relevances list is empty")]
    EmptyBatch,

    /// Temporary file or pipe I/O failed
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// A batch worker task panicked or was aborted
    #[error("Worker task failed: {0}")]
    Join(String),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

impl RelevanceError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BinaryNotFound { .. } => "RELEVANCE_BINARY_NOT_FOUND",
            Self::PermissionDenied(_) => "RELEVANCE_PERMISSION",
            Self::Launch { .. } => "RELEVANCE_LAUNCH",
            Self::Timeout(_) => "RELEVANCE_TIMEOUT",
            Self::ProcessExit { .. } => "RELEVANCE_PROCESS_EXIT",
            Self::EmptyBatch => "RELEVANCE_EMPTY_BATCH",
            Self::Io(_) => "RELEVANCE_IO",
            Self::Config(_) => "RELEVANCE_CONFIG",
            Self::Join(_) => "RELEVANCE_JOIN",
        }
    }

    /// Evaluator invocations are never retried by the core.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
