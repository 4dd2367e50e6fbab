//! Test-only helpers: scripted runners, descriptor builders, scratch workspaces.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::descriptor::TaskDescriptor;
use crate::io::runner::{CommandRunner, InvocationError};

/// Runner that records every command line and fails on one configured call.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    fail_at: Option<usize>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// Fail the `index`-th call (1-based) with exit status 1.
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &str) -> Result<()> {
        let mut calls = self.calls.borrow_mut();
        calls.push(command.to_string());
        if self.fail_at == Some(calls.len()) {
            return Err(InvocationError::Exit { code: Some(1) }.into());
        }
        Ok(())
    }
}

/// Create a descriptor with a deterministic base command and no plan.
pub fn descriptor(id: &str) -> TaskDescriptor {
    TaskDescriptor::new(format!("backlog task create {id}"))
}

/// Create `count` descriptors named `task-1` .. `task-N`.
pub fn descriptors(count: usize) -> Vec<TaskDescriptor> {
    (1..=count)
        .map(|n| descriptor(&format!("task-{n}")))
        .collect()
}

/// Temporary directory holding manifests and config for CLI tests.
pub struct Scratch {
    dir: tempfile::TempDir,
}

impl Scratch {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create scratch dir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `name` inside the scratch dir and return its path.
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Read `name` from the scratch dir, or `None` if it does not exist.
    pub fn read(&self, name: &str) -> Result<Option<String>> {
        let path = self.dir.path().join(name);
        if !path.exists() {
            return Ok(None);
        }
        let contents =
            fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        Ok(Some(contents))
    }
}
