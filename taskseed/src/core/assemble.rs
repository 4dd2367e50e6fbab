//! Assembly of the final shell command line for a descriptor.
//!
//! Plan and acceptance text are quoted with `shell_words::quote`, so a POSIX
//! shell reads each one back as exactly one argument, byte for byte.

use crate::core::descriptor::TaskDescriptor;

pub const PLAN_FLAG: &str = "--plan";
pub const ACCEPTANCE_FLAG: &str = "--ac";

/// Join the policy preamble and a task plan with a blank line.
pub fn combine_plan(preamble: &str, plan: &str) -> String {
    format!("{preamble}\n\n{plan}")
}

/// Build the full command line: base command, then `--plan`, then `--ac`.
///
/// Empty plan or acceptance text is treated as absent.
pub fn assemble(descriptor: &TaskDescriptor, preamble: &str) -> String {
    let mut line = descriptor.command.clone();
    if let Some(plan) = non_empty(descriptor.plan.as_deref()) {
        push_flag(&mut line, PLAN_FLAG, &combine_plan(preamble, plan));
    }
    if let Some(criteria) = non_empty(descriptor.acceptance_criteria.as_deref()) {
        push_flag(&mut line, ACCEPTANCE_FLAG, criteria);
    }
    line
}

/// Short form of a command for progress output: everything before the first ` --`.
///
/// The cut is textual, so a quoted title containing ` --` is shortened too.
/// Only the console label is affected; the dispatched command is unchanged.
pub fn progress_label(command: &str) -> &str {
    let head = command.split(" --").next().unwrap_or(command);
    head.trim_end()
}

fn push_flag(line: &mut String, flag: &str, value: &str) {
    line.push(' ');
    line.push_str(flag);
    line.push(' ');
    line.push_str(&shell_words::quote(value));
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}
