//! Task manifest parsing, validation, and built-in profiles.
//!
//! A manifest is a TOML file with a `[manifest]` header and an ordered list of
//! `[[task]]` tables. Order is creation order: a task may only depend on tasks
//! listed before it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;

use crate::core::descriptor::{TaskDescriptor, TaskSpec};
use crate::core::policy::GOLDEN_RULE;

/// A parsed manifest: metadata plus tasks in creation order.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub manifest: ManifestMeta,
    #[serde(default, rename = "task")]
    pub tasks: Vec<TaskSpec>,
}

/// Manifest header.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ManifestMeta {
    /// Identifier (slug format: `[a-z0-9_-]+`).
    pub name: String,
    #[serde(default)]
    pub summary: Option<String>,
    /// Replaces the default golden-rule preamble for every task in this manifest.
    #[serde(default)]
    pub preamble: Option<String>,
}

impl Manifest {
    /// Load and validate a manifest from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read manifest {}", path.display()))?;
        Self::parse_str(&contents).with_context(|| format!("load manifest {}", path.display()))
    }

    pub fn parse_str(contents: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(contents).context("parse manifest")?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Policy preamble for this manifest's plans.
    pub fn preamble(&self) -> &str {
        self.manifest.preamble.as_deref().unwrap_or(GOLDEN_RULE)
    }

    /// Render every task into a descriptor, preserving order.
    pub fn descriptors(&self, program: &str) -> Vec<TaskDescriptor> {
        self.tasks
            .iter()
            .map(|task| task.to_descriptor(program))
            .collect()
    }

    fn validate(&self) -> Result<()> {
        validate_name(&self.manifest.name)?;
        if let Some(preamble) = &self.manifest.preamble
            && preamble.trim().is_empty()
        {
            bail!("manifest.preamble must be non-empty when set");
        }
        for (offset, task) in self.tasks.iter().enumerate() {
            let position = offset + 1;
            validate_task(task, position).with_context(|| format!("task {position} invalid"))?;
        }
        Ok(())
    }
}

fn validate_task(task: &TaskSpec, position: usize) -> Result<()> {
    if let Some(command) = &task.command {
        if command.trim().is_empty() {
            bail!("command must be non-empty when set");
        }
    } else if task.title.trim().is_empty() {
        bail!("title must be non-empty");
    }
    if task.labels.iter().any(|label| label.trim().is_empty()) {
        bail!("labels must not contain blank entries");
    }
    for reference in &task.depends_on {
        if reference.trim().is_empty() {
            bail!("depends_on must not contain blank entries");
        }
        if let Some(target) = task_number(reference)
            && (target == 0 || target >= position)
        {
            bail!("depends_on {reference} must reference an earlier task");
        }
    }
    Ok(())
}

/// Parse a `task-N` reference into `N`.
fn task_number(reference: &str) -> Option<usize> {
    reference.strip_prefix("task-")?.parse().ok()
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("manifest.name must be non-empty");
    }
    if !name
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_')
    {
        bail!("manifest.name must use [a-z0-9_-] only");
    }
    Ok(())
}

/// A manifest compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinProfile {
    pub name: &'static str,
    source: &'static str,
}

impl BuiltinProfile {
    pub fn load(&self) -> Result<Manifest> {
        let manifest = Manifest::parse_str(self.source)
            .with_context(|| format!("load built-in profile {}", self.name))?;
        if manifest.manifest.name != self.name {
            bail!(
                "built-in profile {} declares name {}",
                self.name,
                manifest.manifest.name
            );
        }
        Ok(manifest)
    }
}

pub const BUILTIN_PROFILES: &[BuiltinProfile] = &[
    BuiltinProfile {
        name: "spring-boot",
        source: include_str!("../../manifests/spring-boot.toml"),
    },
    BuiltinProfile {
        name: "helidon",
        source: include_str!("../../manifests/helidon.toml"),
    },
];

/// Look up and load a built-in profile by name.
pub fn builtin(name: &str) -> Result<Manifest> {
    let profile = BUILTIN_PROFILES
        .iter()
        .find(|profile| profile.name == name)
        .ok_or_else(|| {
            let known: Vec<&str> = BUILTIN_PROFILES.iter().map(|p| p.name).collect();
            anyhow!(
                "unknown profile {name} (available: {})",
                known.join(", ")
            )
        })?;
    profile.load()
}
