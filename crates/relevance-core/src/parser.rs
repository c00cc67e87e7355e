//! Evaluator output parsing
//!
//! QnA tags every answer line with `A: `, or with `Q: A: ` when the question
//! echo and the answer share one line. Everything else (echoed questions,
//! `E:` errors, type lines, timing trailers) is dropped.

/// Answer marker emitted by the evaluator
pub const ANSWER_MARKER: &str = "A: ";

/// Question echo immediately followed by an answer
pub const COMBINED_MARKER: &str = "Q: A: ";

/// Ordered answers extracted from one evaluation
pub type AnswerList = Vec<String>;

/// Extract answers from raw evaluator output, in emission order.
///
/// Splits on `\r\n`, `\r` and `\n`. A marker with nothing after it yields an
/// empty answer rather than being skipped.
pub fn parse_answers(raw: &str) -> AnswerList {
    split_lines(raw).filter_map(parse_line).collect()
}

/// Parse a single output line
pub fn parse_line(line: &str) -> Option<String> {
    line.strip_prefix(COMBINED_MARKER)
        .or_else(|| line.strip_prefix(ANSWER_MARKER))
        .map(str::to_string)
}

fn split_lines(raw: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(raw);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(idx) => {
                let skip = if current[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[idx + skip..]);
                Some(&current[..idx])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}
