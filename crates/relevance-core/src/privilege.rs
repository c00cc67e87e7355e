//! Privilege precondition for invoking the evaluator
//!
//! On macOS the QnA binary only reports client inspectors correctly when run
//! as root. Other platforms have no requirement.

use crate::error::{RelevanceError, RelevanceResult};

/// Whether this platform needs an elevated process to run QnA
pub fn requires_elevation() -> bool {
    cfg!(target_os = "macos")
}

/// Whether the current process runs with an effective uid of 0
#[cfg(unix)]
pub fn is_elevated() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
pub fn is_elevated() -> bool {
    false
}

/// Fail with `PermissionDenied` when elevation is required but missing
pub fn check(requires: bool, elevated: bool) -> RelevanceResult<()> {
    if requires && !elevated {
        return Err(RelevanceError::permission(
            "QnA must be run as root or with sudo on macOS",
        ));
    }
    Ok(())
}

/// Check the precondition for the current process
pub fn ensure_permitted() -> RelevanceResult<()> {
    check(requires_elevation(), is_elevated())
}
