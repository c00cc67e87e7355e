//! Evaluator configuration
//!
//! Values are layered: built-in defaults, then an optional JSON file, then
//! `RELEVANCE_*` environment variables. The CLI applies its flags last.

mod env_loader;
mod file_loader;
pub mod timeouts;

pub use env_loader::{load_env_overrides, load_env_overrides_with};
pub use file_loader::{DEFAULT_CONFIG_FILE, load_from_file};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{RelevanceError, RelevanceResult};
use crate::evaluator::Transport;

/// Settings shared by single evaluations and batches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Explicit evaluator binary; located automatically when unset
    pub qna_path: Option<PathBuf>,

    /// Ceiling for one evaluator invocation
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,

    /// How queries reach the evaluator
    pub transport: Transport,

    /// Maximum evaluator processes running at once in a batch
    pub max_concurrency: Option<usize>,

    /// Write raw and parsed output to note files after each evaluation
    pub write_notes: bool,

    /// Directory receiving the note files
    pub notes_dir: PathBuf,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            qna_path: None,
            timeout: timeouts::evaluation_timeout(),
            transport: Transport::default(),
            max_concurrency: None,
            write_notes: false,
            notes_dir: PathBuf::from("."),
        }
    }
}

impl EvaluatorConfig {
    /// Load defaults, the config file (if it exists) and environment overrides
    pub fn load(config_file: Option<&Path>) -> RelevanceResult<Self> {
        let path = config_file.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        let mut config = if path.exists() {
            load_from_file(path)?
        } else if config_file.is_some() {
            return Err(RelevanceError::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        } else {
            Self::default()
        };

        load_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the evaluator cannot work with
    pub fn validate(&self) -> RelevanceResult<()> {
        if self.timeout.is_zero() {
            return Err(RelevanceError::config("timeout must be greater than zero"));
        }
        if self.max_concurrency == Some(0) {
            return Err(RelevanceError::config(
                "max_concurrency must be at least 1 when set",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvaluatorConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.transport, Transport::Piped);
        assert!(config.qna_path.is_none());
        assert!(!config.write_notes);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let config = EvaluatorConfig {
            timeout: Duration::ZERO,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(RelevanceError::Config(_))));

        let config = EvaluatorConfig {
            max_concurrency: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_explicit_config_file() {
        let err = EvaluatorConfig::load(Some(Path::new("/nonexistent/relevance.json")))
            .unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }
}
