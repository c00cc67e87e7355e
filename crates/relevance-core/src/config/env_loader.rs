//! Environment variable overrides
//!
//! Recognised variables:
//! - `RELEVANCE_QNA_PATH`
//! - `RELEVANCE_TIMEOUT_SECS`
//! - `RELEVANCE_TRANSPORT` (`piped` or `file`)
//! - `RELEVANCE_MAX_CONCURRENCY`
//! - `RELEVANCE_WRITE_NOTES`

use std::path::PathBuf;
use std::time::Duration;

use super::EvaluatorConfig;
use crate::error::{RelevanceError, RelevanceResult};

/// Apply overrides from the process environment
pub fn load_env_overrides(config: &mut EvaluatorConfig) -> RelevanceResult<()> {
    load_env_overrides_with(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn load_env_overrides_with<F>(config: &mut EvaluatorConfig, lookup: F) -> RelevanceResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = lookup("RELEVANCE_QNA_PATH").filter(|p| !p.is_empty()) {
        config.qna_path = Some(PathBuf::from(path));
    }

    if let Some(secs) = lookup("RELEVANCE_TIMEOUT_SECS") {
        let secs: u64 = secs
            .parse()
            .map_err(|_| RelevanceError::config("Invalid RELEVANCE_TIMEOUT_SECS value"))?;
        config.timeout = Duration::from_secs(secs);
    }

    if let Some(transport) = lookup("RELEVANCE_TRANSPORT") {
        config.transport = transport.parse()?;
    }

    if let Some(limit) = lookup("RELEVANCE_MAX_CONCURRENCY") {
        let limit: usize = limit
            .parse()
            .map_err(|_| RelevanceError::config("Invalid RELEVANCE_MAX_CONCURRENCY value"))?;
        config.max_concurrency = Some(limit);
    }

    if let Some(write_notes) = lookup("RELEVANCE_WRITE_NOTES") {
        config.write_notes = parse_flag(&write_notes)
            .ok_or_else(|| RelevanceError::config("Invalid RELEVANCE_WRITE_NOTES value"))?;
    }

    Ok(())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::Transport;
    use std::collections::HashMap;

    fn apply(vars: &[(&str, &str)]) -> RelevanceResult<EvaluatorConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut config = EvaluatorConfig::default();
        load_env_overrides_with(&mut config, |key| vars.get(key).cloned())?;
        Ok(config)
    }

    #[test]
    fn test_env_overrides() {
        let config = apply(&[
            ("RELEVANCE_QNA_PATH", "/usr/local/bin/qna"),
            ("RELEVANCE_TIMEOUT_SECS", "12"),
            ("RELEVANCE_TRANSPORT", "file"),
            ("RELEVANCE_MAX_CONCURRENCY", "4"),
            ("RELEVANCE_WRITE_NOTES", "true"),
        ])
        .unwrap();

        assert_eq!(config.qna_path, Some(PathBuf::from("/usr/local/bin/qna")));
        assert_eq!(config.timeout, Duration::from_secs(12));
        assert_eq!(config.transport, Transport::File);
        assert_eq!(config.max_concurrency, Some(4));
        assert!(config.write_notes);
    }

    #[test]
    fn test_no_overrides_keeps_defaults() {
        assert_eq!(apply(&[]).unwrap(), EvaluatorConfig::default());
    }

    #[test]
    fn test_invalid_values() {
        assert!(apply(&[("RELEVANCE_TIMEOUT_SECS", "soon")]).is_err());
        assert!(apply(&[("RELEVANCE_TRANSPORT", "carrier-pigeon")]).is_err());
        assert!(apply(&[("RELEVANCE_MAX_CONCURRENCY", "-1")]).is_err());
    }

    #[test]
    fn test_write_notes_flag() {
        assert!(apply(&[("RELEVANCE_WRITE_NOTES", "1")]).unwrap().write_notes);
        assert!(apply(&[("RELEVANCE_WRITE_NOTES", "TRUE")]).unwrap().write_notes);
        assert!(!apply(&[("RELEVANCE_WRITE_NOTES", "0")]).unwrap().write_notes);

        let err = apply(&[("RELEVANCE_WRITE_NOTES", "yes please")]).unwrap_err();
        assert!(matches!(err, RelevanceError::Config(_)));
    }
}
