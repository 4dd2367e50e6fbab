//! Task descriptors and their structured manifest form.

use serde::Deserialize;

/// One task-creation request handed to the driver.
///
/// `command` is the base invocation of the external tool. Plan and acceptance
/// criteria are opaque text appended as quoted arguments at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDescriptor {
    pub command: String,
    pub plan: Option<String>,
    pub acceptance_criteria: Option<String>,
}

impl TaskDescriptor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            plan: None,
            acceptance_criteria: None,
        }
    }

    pub fn with_plan(mut self, plan: impl Into<String>) -> Self {
        self.plan = Some(plan.into());
        self
    }

    pub fn with_acceptance_criteria(mut self, criteria: impl Into<String>) -> Self {
        self.acceptance_criteria = Some(criteria.into());
        self
    }
}

/// Task priority accepted by the external tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Authoring-time task definition as written in a manifest `[[task]]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskSpec {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub labels: Vec<String>,
    /// Static references to earlier tasks (e.g. `task-2`), resolved by the external tool.
    #[serde(default)]
    pub depends_on: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub acceptance_criteria: Option<String>,
    /// Raw base command. Overrides title/priority/labels/depends_on/description.
    #[serde(default)]
    pub command: Option<String>,
}

impl TaskSpec {
    /// Render the base `task create` invocation for `program`.
    pub fn base_command(&self, program: &str) -> String {
        if let Some(command) = &self.command {
            return command.clone();
        }

        let mut parts = vec![
            quote(program),
            "task".to_string(),
            "create".to_string(),
            quote(&self.title),
        ];
        if let Some(priority) = self.priority {
            parts.push("--priority".to_string());
            parts.push(priority.as_str().to_string());
        }
        if !self.labels.is_empty() {
            parts.push("--labels".to_string());
            parts.push(quote(&self.labels.join(",")));
        }
        if !self.depends_on.is_empty() {
            parts.push("--depends-on".to_string());
            parts.push(quote(&self.depends_on.join(",")));
        }
        if let Some(description) = &self.description {
            parts.push("--desc".to_string());
            parts.push(quote(description));
        }
        parts.join(" ")
    }

    pub fn to_descriptor(&self, program: &str) -> TaskDescriptor {
        TaskDescriptor {
            command: self.base_command(program),
            plan: self.plan.clone(),
            acceptance_criteria: self.acceptance_criteria.clone(),
        }
    }
}

fn quote(value: &str) -> String {
    shell_words::quote(value).into_owned()
}
