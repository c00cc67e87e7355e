//! Shared fixtures for end-to-end tests

use relevance::EvaluatorPath;
use std::os::unix::fs::PermissionsExt;
use tempfile::TempDir;

/// Echoes the expression of each query back as a single answer; queries
/// containing `broken` exit non-zero and `slow` ones sleep past any test
/// timeout.
const ECHO_STUB: &str = r#"#!/bin/sh
if [ -n "$3" ]; then input=$(cat "$3"); else input=$(cat); fi
case "$input" in
    *broken*) echo "E: This expression could not be parsed." >&2; exit 1 ;;
    *slow*) exec sleep 30 ;;
esac
printf '%s\nQ: A: %s\nT: string\n' "$input" "${input#Q: }"
"#;

pub fn install_stub() -> (TempDir, EvaluatorPath) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("qna");
    std::fs::write(&path, ECHO_STUB).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    let path = EvaluatorPath::new(path).unwrap();
    (dir, path)
}
