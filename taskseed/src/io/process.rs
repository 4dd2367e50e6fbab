//! Running child processes attached to the parent's terminal.

use std::process::{Command, ExitStatus, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, error, instrument, warn};
use wait_timeout::ChildExt;

/// How an attached child process ended.
#[derive(Debug, Clone, Copy)]
pub struct ExitOutcome {
    pub status: ExitStatus,
    pub timed_out: bool,
}

/// Run `cmd` with stdin/stdout/stderr inherited and block until it exits.
///
/// With `timeout` set, the child is killed once it elapses and `timed_out` is
/// reported. Without one, this waits indefinitely.
#[instrument(skip_all, fields(timeout_secs = timeout.map_or(0, |t| t.as_secs())))]
pub fn run_attached(mut cmd: Command, timeout: Option<Duration>) -> Result<ExitOutcome> {
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    debug!("spawning child process");
    let mut child = match cmd.spawn() {
        Ok(c) => c,
        Err(e) => {
            error!(err = %e, "failed to spawn command");
            return Err(e).context("spawn command");
        }
    };

    let Some(timeout) = timeout else {
        let status = child.wait().context("wait for command")?;
        debug!(exit_code = ?status.code(), "command finished");
        return Ok(ExitOutcome {
            status,
            timed_out: false,
        });
    };

    let mut timed_out = false;
    let status = match child.wait_timeout(timeout).context("wait for command")? {
        Some(status) => status,
        None => {
            warn!(
                timeout_secs = timeout.as_secs(),
                "command timed out, killing"
            );
            timed_out = true;
            child.kill().context("kill command")?;
            child.wait().context("wait command after kill")?
        }
    };

    debug!(exit_code = ?status.code(), timed_out, "command finished");
    Ok(ExitOutcome { status, timed_out })
}
