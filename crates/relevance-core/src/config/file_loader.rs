//! File-based configuration loading

use std::path::Path;
use tracing::debug;

use super::EvaluatorConfig;
use crate::error::{RelevanceError, RelevanceResult};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "relevance_config.json";

/// Load configuration from a JSON file; missing keys keep their defaults
pub fn load_from_file(path: &Path) -> RelevanceResult<EvaluatorConfig> {
    debug!("Loading configuration from {}", path.display());

    let content = std::fs::read_to_string(path)
        .map_err(|e| RelevanceError::io_with_path(path, e))?;

    serde_json::from_str(&content).map_err(|e| {
        RelevanceError::config(format!("Invalid config file {}: {}", path.display(), e))
    })
}
