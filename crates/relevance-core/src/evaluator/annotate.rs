//! Human-facing additions to raw evaluator output
//!
//! Kept apart from the parser: neither addition starts with an answer
//! marker, so answers parsed from annotated output are unchanged.

use std::time::Duration;

/// Evaluator error text for a result with no string form
pub const STRING_OPERATOR_ERROR: &str = r#"E: The operator "string" is not defined."#;

/// Note appended when [`STRING_OPERATOR_ERROR`] appears
pub const STRING_OPERATOR_NOTE: &str =
    "\nInfo: This error means a result was found, but it does not have a string representation.";

/// Timing line appended after the evaluator's stdout
pub fn timing_trailer(elapsed: Duration) -> String {
    format!("Time Taken: {:?} as measured by relevance-core.\n", elapsed)
}

/// Build raw output from captured stdout
pub fn annotate(stdout: &str, elapsed: Duration) -> String {
    let mut raw = String::with_capacity(stdout.len() + 128);
    raw.push_str(stdout);
    // The trailer must start on its own line or it joins the last answer
    if !stdout.is_empty() && !stdout.ends_with(['\n', '\r']) {
        raw.push('\n');
    }
    raw.push_str(&timing_trailer(elapsed));

    if raw.contains(STRING_OPERATOR_ERROR) {
        raw.push_str(STRING_OPERATOR_NOTE);
    }
    raw
}
