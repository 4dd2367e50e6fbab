//! Sequential, fail-fast provisioning of a descriptor list.

use std::fmt;

use anyhow::Result;
use tracing::{debug, info, instrument, warn};

use crate::core::assemble::{assemble, progress_label};
use crate::core::descriptor::TaskDescriptor;
use crate::io::runner::CommandRunner;

/// Progress notifications emitted by [`provision`].
#[derive(Debug)]
pub enum ProvisionEvent<'a> {
    /// About to hand task `index` (1-based) to the runner.
    Dispatching {
        index: usize,
        total: usize,
        label: &'a str,
    },
    /// Task `index` was created.
    Created { index: usize, label: &'a str },
    /// Task `index` failed; no further tasks will be dispatched.
    Failed {
        index: usize,
        label: &'a str,
        error: &'a anyhow::Error,
    },
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionOutcome {
    pub dispatched: usize,
}

/// Context attached to the runner error when a task fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionError {
    /// 1-based position of the failed task.
    pub index: usize,
    pub label: String,
}

impl fmt::Display for ProvisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task {} failed ({})", self.index, self.label)
    }
}

impl std::error::Error for ProvisionError {}

/// Dispatch every descriptor in order, waiting for each to finish.
///
/// Stops at the first runner error, which is returned with a
/// [`ProvisionError`] context naming the task. Later descriptors are never run.
#[instrument(skip_all, fields(total = descriptors.len()))]
pub fn provision<R: CommandRunner, F: FnMut(ProvisionEvent<'_>)>(
    descriptors: &[TaskDescriptor],
    preamble: &str,
    runner: &R,
    mut on_event: F,
) -> Result<ProvisionOutcome> {
    let total = descriptors.len();
    for (offset, descriptor) in descriptors.iter().enumerate() {
        let index = offset + 1;
        let label = progress_label(&descriptor.command);
        let command_line = assemble(descriptor, preamble);

        on_event(ProvisionEvent::Dispatching {
            index,
            total,
            label,
        });
        debug!(index, bytes = command_line.len(), "dispatching task");

        if let Err(err) = runner.run(&command_line) {
            warn!(index, err = %format!("{err:#}"), "task creation failed");
            on_event(ProvisionEvent::Failed {
                index,
                label,
                error: &err,
            });
            return Err(err.context(ProvisionError {
                index,
                label: label.to_string(),
            }));
        }

        on_event(ProvisionEvent::Created { index, label });
    }

    info!(dispatched = total, "all tasks provisioned");
    Ok(ProvisionOutcome { dispatched: total })
}
