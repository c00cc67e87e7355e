//! Choosing what to evaluate from the command line

use relevance_core::Query;
use std::path::{Path, PathBuf};

/// Query file picked up when no argument is given
pub const DEFAULT_INPUT_FILE: &str = "relevance_tmp.txt";

/// What a single run evaluates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A prepared query file passed straight to the evaluator
    File(PathBuf),
    /// Literal query text
    Query(Query),
}

/// Resolve the argument text: an existing file wins over literal text; with
/// no text, `default_file` is used when present, else the placeholder query.
pub fn select_input(text: &str, default_file: &Path) -> Input {
    if !text.is_empty() {
        let candidate = Path::new(text);
        if candidate.is_file() {
            return Input::File(candidate.to_path_buf());
        }
        return Input::Query(Query::new(text));
    }

    if default_file.is_file() {
        Input::File(default_file.to_path_buf())
    } else {
        Input::Query(Query::default())
    }
}
