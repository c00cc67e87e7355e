//! Constructor methods for RelevanceError

use super::types::RelevanceError;
use std::path::Path;

impl RelevanceError {
    /// Create a launch error for the evaluator at `path`
    pub fn launch(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Launch {
            path: path.as_ref().display().to_string(),
            message: message.into(),
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Create an IO error that names the file involved
    pub fn io_with_path(path: impl AsRef<Path>, message: impl std::fmt::Display) -> Self {
        Self::Io(format!("{}: {}", path.as_ref().display(), message))
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new permission error
    pub fn permission(message: impl Into<String>) -> Self {
        Self::PermissionDenied(message.into())
    }
}
