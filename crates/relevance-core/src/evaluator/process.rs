//! Evaluator process driver
//!
//! Spawns QnA, feeds it the query, drains stdout and stderr on their own
//! tasks and races process exit against the timeout.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;
use tokio::task::AbortHandle;
use tokio::time::{Instant, timeout_at};
use tracing::{debug, warn};

use crate::error::{RelevanceError, RelevanceResult};

/// Flags requesting text output with result types
pub const EVALUATOR_FLAGS: &[&str] = &["-t", "-showtypes"];

/// Where the evaluator reads its query from
pub(crate) enum QueryInput<'a> {
    /// Written to stdin, which is closed afterwards
    Stdin(String),
    /// Passed as the trailing argument
    File(&'a Path),
}

/// Captured process output
#[derive(Debug)]
pub(crate) struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    pub elapsed: Duration,
}

/// Run the evaluator once
pub(crate) async fn run_evaluator(
    path: &Path,
    input: QueryInput<'_>,
    timeout_duration: Duration,
) -> RelevanceResult<ProcessOutput> {
    let mut cmd = Command::new(path);
    cmd.args(EVALUATOR_FLAGS)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let payload = match input {
        QueryInput::Stdin(payload) => {
            cmd.stdin(Stdio::piped());
            Some(payload)
        }
        QueryInput::File(file) => {
            cmd.arg(file).stdin(Stdio::null());
            None
        }
    };

    let start = Instant::now();
    let mut child = cmd
        .spawn()
        .map_err(|e| RelevanceError::launch(path, e.to_string()))?;
    debug!(pid = ?child.id(), "Spawned evaluator {}", path.display());

    // Write on a separate task so a chatty evaluator can't block on a full
    // stdout pipe while we are still writing its input.
    let stdin_task = match (child.stdin.take(), payload) {
        (Some(mut stdin), Some(payload)) => Some(tokio::spawn(async move {
            let result = stdin.write_all(payload.as_bytes()).await;
            let shutdown = stdin.shutdown().await;
            drop(stdin);
            result.and(shutdown)
        })),
        _ => None,
    };

    let mut stdout_task = tokio::spawn(read_stream(child.stdout.take()));
    let mut stderr_task = tokio::spawn(read_stream(child.stderr.take()));

    let mut abort_handles = vec![stdout_task.abort_handle(), stderr_task.abort_handle()];
    if let Some(task) = &stdin_task {
        abort_handles.push(task.abort_handle());
    }

    // One deadline covers exit and draining both pipes: a descendant that
    // inherited stdout or stderr must not stretch the call past the ceiling.
    let deadline = start + timeout_duration;
    let collected = timeout_at(deadline, async {
        let status = child.wait().await.map_err(|e| {
            RelevanceError::io(format!("Failed to wait for evaluator: {}", e))
        })?;
        let stdout = (&mut stdout_task).await??;
        let stderr = (&mut stderr_task).await??;
        Ok::<_, RelevanceError>((status, stdout, stderr))
    })
    .await;
    let waited = start.elapsed();

    let (status, stdout, stderr) = match collected {
        Ok(Ok(parts)) if waited < timeout_duration => parts,
        Ok(Ok(_)) => {
            warn!("Evaluator finished after the {:?} ceiling", timeout_duration);
            abort_all(&abort_handles);
            return Err(RelevanceError::Timeout(timeout_duration));
        }
        Ok(Err(e)) => {
            abort_all(&abort_handles);
            return Err(e);
        }
        Err(_) => {
            warn!("Evaluator timed out after {:?}, killing it", timeout_duration);
            // Fails harmlessly when the evaluator already exited and only its
            // output is still held open
            if let Err(e) = child.kill().await {
                debug!("Failed to kill evaluator: {}", e);
            }
            abort_all(&abort_handles);
            return Err(RelevanceError::Timeout(timeout_duration));
        }
    };

    if let Some(task) = stdin_task {
        // The evaluator may exit before reading everything; a broken pipe
        // here is not a failure of the evaluation.
        if let Ok(Err(e)) = task.await {
            debug!("Writing query to evaluator stdin failed: {}", e);
        }
    }

    if !status.success() {
        return Err(RelevanceError::ProcessExit {
            code: status.code(),
            stderr,
        });
    }

    Ok(ProcessOutput {
        stdout,
        stderr,
        elapsed: waited,
    })
}

async fn read_stream<R: AsyncRead + Unpin>(stream: Option<R>) -> std::io::Result<String> {
    let Some(mut stream) = stream else {
        return Ok(String::new());
    };
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn abort_all(handles: &[AbortHandle]) {
    for handle in handles {
        handle.abort();
    }
}
