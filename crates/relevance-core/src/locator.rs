//! Evaluator binary discovery
//!
//! Candidates are probed in a fixed priority order and the first one that is
//! an executable regular file wins. Bare command names (no directory part)
//! are looked up in the working directory and then along `PATH`.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{RelevanceError, RelevanceResult};

/// Well-known QnA install locations, most likely first, bare names last.
pub const DEFAULT_CANDIDATES: &[&str] = &[
    "/usr/local/bin/qna",
    "/Library/BESAgent/BESAgent.app/Contents/MacOS/QnA",
    "/opt/BESClient/bin/qna",
    "C:/Program Files (x86)/BigFix Enterprise/BES Client/qna.exe",
    "qna",
    "qna.exe",
];

/// A path that passed the executable check
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EvaluatorPath(PathBuf);

impl EvaluatorPath {
    /// Validate an explicit path
    pub fn new(path: impl Into<PathBuf>) -> RelevanceResult<Self> {
        let path = path.into();
        if is_executable(&path) {
            Ok(Self(path))
        } else {
            Err(RelevanceError::BinaryNotFound {
                searched: vec![path.display().to_string()],
            })
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for EvaluatorPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for EvaluatorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Check that `path` exists, is a regular file and is executable.
///
/// POSIX systems require at least one execute bit; elsewhere existence of a
/// regular file is enough.
pub fn is_executable(path: &Path) -> bool {
    let Ok(metadata) = std::fs::metadata(path) else {
        return false;
    };
    metadata.is_file() && has_execute_permission(&metadata)
}

#[cfg(unix)]
fn has_execute_permission(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn has_execute_permission(_metadata: &std::fs::Metadata) -> bool {
    true
}

/// Prioritised evaluator search
#[derive(Debug, Clone)]
pub struct BinaryLocator {
    candidates: Vec<PathBuf>,
    search_path: Option<OsString>,
}

impl Default for BinaryLocator {
    fn default() -> Self {
        Self::new(DEFAULT_CANDIDATES.iter().map(PathBuf::from))
    }
}

impl BinaryLocator {
    /// Create a locator over an explicit candidate list, searching the
    /// process `PATH` for bare names
    pub fn new<I, P>(candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
            search_path: std::env::var_os("PATH"),
        }
    }

    /// Replace the directories used to resolve bare names
    pub fn with_search_path(mut self, search_path: impl Into<OsString>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Return the first candidate that passes [`is_executable`]
    pub fn locate(&self) -> RelevanceResult<EvaluatorPath> {
        for candidate in &self.candidates {
            if let Some(found) = self.resolve(candidate) {
                debug!("Using evaluator at {}", found.display());
                return Ok(EvaluatorPath(found));
            }
            debug!("Evaluator candidate rejected: {}", candidate.display());
        }

        Err(RelevanceError::BinaryNotFound {
            searched: self
                .candidates
                .iter()
                .map(|c| c.display().to_string())
                .collect(),
        })
    }

    fn resolve(&self, candidate: &Path) -> Option<PathBuf> {
        if is_executable(candidate) {
            return Some(candidate.to_path_buf());
        }
        if !is_bare_name(candidate) {
            return None;
        }

        let search_path = self.search_path.as_ref()?;
        std::env::split_paths(search_path)
            .map(|dir| dir.join(candidate))
            .find(|path| is_executable(path))
    }
}

fn is_bare_name(candidate: &Path) -> bool {
    candidate.components().count() == 1 && candidate.parent() == Some(Path::new(""))
}

/// Locate the evaluator using the default candidate list
pub fn locate() -> RelevanceResult<EvaluatorPath> {
    BinaryLocator::default().locate()
}
