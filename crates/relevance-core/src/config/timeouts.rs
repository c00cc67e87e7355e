//! Default timeout values

use std::time::Duration;

/// Ceiling for a single evaluator invocation (30 seconds)
pub const EVALUATION_SECS: u64 = 30;

/// Get the evaluation timeout as Duration
pub fn evaluation_timeout() -> Duration {
    Duration::from_secs(EVALUATION_SECS)
}
