//! Evaluator data types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::RelevanceError;
use crate::parser::{AnswerList, parse_answers};

/// How a query is delivered to the evaluator process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Query written to the evaluator's standard input
    #[default]
    Piped,
    /// Query staged in a temporary file passed as an argument
    File,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Piped => write!(f, "piped"),
            Transport::File => write!(f, "file"),
        }
    }
}

impl FromStr for Transport {
    type Err = RelevanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "piped" | "pipe" | "stdin" => Ok(Transport::Piped),
            "file" | "file-staged" => Ok(Transport::File),
            other => Err(RelevanceError::config(format!(
                "Unknown transport '{}' (expected 'piped' or 'file')",
                other
            ))),
        }
    }
}

/// Output of one evaluator invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Captured stdout followed by the timing trailer and any notes
    pub raw: String,

    /// Captured stdout, untouched
    pub stdout: String,

    /// Captured stderr; diagnostic only
    pub stderr: String,

    /// Wall-clock time from spawn until output was collected
    pub elapsed: Duration,
}

impl Evaluation {
    /// Answers in the order the evaluator emitted them
    pub fn answers(&self) -> AnswerList {
        parse_answers(&self.raw)
    }

    /// Answers joined with `separator`
    pub fn joined(&self, separator: &str) -> String {
        self.answers().join(separator)
    }

    pub fn has_stderr(&self) -> bool {
        !self.stderr.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_parse() {
        assert_eq!("piped".parse::<Transport>().unwrap(), Transport::Piped);
        assert_eq!("STDIN".parse::<Transport>().unwrap(), Transport::Piped);
        assert_eq!("file".parse::<Transport>().unwrap(), Transport::File);
        assert!("socket".parse::<Transport>().is_err());
        assert_eq!(Transport::File.to_string(), "file");
    }

    #[test]
    fn test_transport_serde() {
        let json = serde_json::to_string(&Transport::File).unwrap();
        assert_eq!(json, "\"file\"");
        let parsed: Transport = serde_json::from_str("\"piped\"").unwrap();
        assert_eq!(parsed, Transport::Piped);
    }

    #[test]
    fn test_evaluation_answers() {
        let evaluation = Evaluation {
            raw: "Q: A: one\nA: two\nTime Taken: 1ms as measured by relevance-core.\n".into(),
            stdout: "Q: A: one\nA: two\n".into(),
            stderr: String::new(),
            elapsed: Duration::from_millis(1),
        };
        assert_eq!(evaluation.answers(), vec!["one", "two"]);
        assert_eq!(evaluation.joined(", "), "one, two");
        assert!(!evaluation.has_stderr());
    }
}
