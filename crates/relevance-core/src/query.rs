//! Relevance query normalisation

use std::fmt;

/// Leading marker QnA expects in front of every query
pub const QUERY_MARKER: &str = "Q: ";

/// Placeholder evaluated when the caller supplies nothing
pub const PLACEHOLDER_QUERY: &str = r#"("No Relevance Specified", TRUE, version of client)"#;

/// An immutable relevance expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The text exactly as supplied
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The expression with any leading marker removed
    pub fn expression(&self) -> &str {
        self.0.strip_prefix(QUERY_MARKER).unwrap_or(&self.0)
    }

    /// The marked line, `Q: <expression>`, without a line terminator
    pub fn marked(&self) -> String {
        format!("{}{}", QUERY_MARKER, self.expression())
    }

    /// Bytes handed to the evaluator: the marked line ending in a newline
    pub fn payload(&self) -> String {
        let mut payload = self.marked();
        if !payload.ends_with('\n') {
            payload.push('\n');
        }
        payload
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new(PLACEHOLDER_QUERY)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Query {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&String> for Query {
    fn from(s: &String) -> Self {
        Self::new(s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_normalisation_is_idempotent() {
        let bare = Query::new("version of client");
        let marked = Query::new("Q: version of client");
        assert_eq!(bare.payload(), marked.payload());
        assert_eq!(bare.payload(), "Q: version of client\n");
    }

    #[test]
    fn test_existing_newline_not_doubled() {
        assert_eq!(Query::new("TRUE\n").payload(), "Q: TRUE\n");
    }

    #[test]
    fn test_only_one_marker_stripped() {
        let query = Query::new("Q: Q: odd");
        assert_eq!(query.expression(), "Q: odd");
        assert_eq!(query.payload(), "Q: Q: odd\n");
    }

    #[test]
    fn test_default_is_placeholder() {
        assert_eq!(Query::default().as_str(), PLACEHOLDER_QUERY);
    }
}
