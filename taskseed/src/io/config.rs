//! taskseed configuration stored in `taskseed.toml`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "taskseed.toml";

/// taskseed configuration (TOML).
///
/// Every field is optional in the file; missing fields fall back to the
/// defaults, which drive the `backlog` CLI through `sh -c`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeedConfig {
    /// Executable used when rendering structured task specs.
    pub program: String,

    /// Argv prefix used to run each assembled command line (e.g. `["sh","-c"]`).
    pub shell: Vec<String>,

    /// Per-task wall-clock limit in seconds. `0` waits forever.
    pub timeout_secs: u64,

    /// Working directory for child processes. Defaults to the current directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workdir: Option<PathBuf>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            program: "backlog".to_string(),
            shell: vec!["sh".to_string(), "-c".to_string()],
            timeout_secs: 0,
            workdir: None,
        }
    }
}

impl SeedConfig {
    pub fn validate(&self) -> Result<()> {
        if self.program.trim().is_empty() {
            return Err(anyhow!("program must be non-empty"));
        }
        if self.shell.is_empty() || self.shell[0].trim().is_empty() {
            return Err(anyhow!("shell must be a non-empty array"));
        }
        if let Some(dir) = &self.workdir
            && dir.as_os_str().is_empty()
        {
            return Err(anyhow!("workdir must be non-empty when set"));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SeedConfig::default()`.
pub fn load_config(path: &Path) -> Result<SeedConfig> {
    if !path.exists() {
        let cfg = SeedConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SeedConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &SeedConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
