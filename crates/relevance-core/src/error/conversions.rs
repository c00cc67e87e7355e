//! From trait implementations for RelevanceError conversions

use super::types::RelevanceError;

impl From<std::io::Error> for RelevanceError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for RelevanceError {
    fn from(error: serde_json::Error) -> Self {
        Self::config(error.to_string())
    }
}

impl From<tokio::task::JoinError> for RelevanceError {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::Join(error.to_string())
    }
}
