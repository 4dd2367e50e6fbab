//! Command runner abstraction.
//!
//! The [`CommandRunner`] trait decouples the provisioning driver from how a
//! command line is actually executed. [`ShellRunner`] hands it to the host
//! shell; tests use scripted runners that only record what they were given.

use std::fmt;
use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

use anyhow::{Result, anyhow};
use tracing::{debug, instrument, warn};

use crate::io::config::SeedConfig;
use crate::io::process::run_attached;

/// Why an external invocation did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationError {
    /// The shell could not be started (or waited on).
    Spawn { message: String },
    /// The command exited non-zero. `code` is `None` when killed by a signal.
    Exit { code: Option<i32> },
    /// The configured timeout elapsed and the command was killed.
    TimedOut { timeout_secs: u64 },
}

impl fmt::Display for InvocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvocationError::Spawn { message } => write!(f, "could not run command: {message}"),
            InvocationError::Exit { code: Some(code) } => {
                write!(f, "command exited with status {code}")
            }
            InvocationError::Exit { code: None } => write!(f, "command terminated by signal"),
            InvocationError::TimedOut { timeout_secs } => {
                write!(f, "command timed out after {timeout_secs}s")
            }
        }
    }
}

impl std::error::Error for InvocationError {}

/// Executes one fully assembled command line, synchronously.
pub trait CommandRunner {
    /// Run `command` to completion. Returns an [`InvocationError`] on failure.
    fn run(&self, command: &str) -> Result<()>;
}

/// Runs each command line through the host shell (`sh -c` by default).
#[derive(Debug, Clone)]
pub struct ShellRunner {
    pub shell: Vec<String>,
    pub workdir: Option<PathBuf>,
    pub timeout: Option<Duration>,
}

impl ShellRunner {
    pub fn from_config(config: &SeedConfig) -> Self {
        Self {
            shell: config.shell.clone(),
            workdir: config.workdir.clone(),
            timeout: config.timeout(),
        }
    }
}

impl CommandRunner for ShellRunner {
    #[instrument(skip_all, fields(bytes = command.len()))]
    fn run(&self, command: &str) -> Result<()> {
        let (program, args) = self
            .shell
            .split_first()
            .ok_or_else(|| anyhow!("shell must be a non-empty array"))?;

        let mut cmd = Command::new(program);
        cmd.args(args).arg(command);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        let outcome = run_attached(cmd, self.timeout).map_err(|err| InvocationError::Spawn {
            message: format!("{err:#}"),
        })?;

        if outcome.timed_out {
            let timeout_secs = self.timeout.map_or(0, |t| t.as_secs());
            return Err(InvocationError::TimedOut { timeout_secs }.into());
        }
        if !outcome.status.success() {
            warn!(exit_code = ?outcome.status.code(), "command failed");
            return Err(InvocationError::Exit {
                code: outcome.status.code(),
            }
            .into());
        }

        debug!("command completed successfully");
        Ok(())
    }
}

/// Prints each command line instead of running it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, command: &str) -> Result<()> {
        println!("{command}");
        Ok(())
    }
}
