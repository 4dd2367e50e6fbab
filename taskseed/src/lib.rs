//! Dependency-ordered task provisioning through an external task-tracking CLI.
//!
//! A manifest lists tasks in creation order. For each task the driver joins
//! the shared policy preamble with the task plan, shell-quotes plan and
//! acceptance text, appends them to the base command, and runs the result
//! through the host shell. The first failure ends the run.
//!
//! - **[`core`]**: Pure descriptor rendering and command assembly.
//! - **[`io`]**: Config, manifests, and child-process execution.
//! - **[`provision`]**: The sequential fail-fast driver.
//! - **[`cli`]**: Console reporting and command implementations.

pub mod cli;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod provision;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
