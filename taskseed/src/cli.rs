//! Command implementations shared by `taskseed` and the per-profile binaries.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tracing::debug;

use crate::exit_codes;
use crate::io::config::{DEFAULT_CONFIG_FILE, SeedConfig, load_config, write_config};
use crate::io::manifest::{BUILTIN_PROFILES, Manifest, builtin};
use crate::io::runner::{DryRunRunner, ShellRunner};
use crate::logging;
use crate::provision::{ProvisionEvent, provision};

/// Where the task list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    Builtin(String),
    File(PathBuf),
}

impl ManifestSource {
    pub fn load(&self) -> Result<Manifest> {
        match self {
            ManifestSource::Builtin(name) => builtin(name),
            ManifestSource::File(path) => Manifest::load(path),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub source: ManifestSource,
    pub config_path: PathBuf,
    /// Print assembled commands instead of running them.
    pub dry_run: bool,
}

/// Provision every task of a manifest, stopping at the first failure.
pub fn run_manifest(options: &RunOptions) -> Result<()> {
    let config = load_config(&options.config_path)?;
    let manifest = options.source.load()?;
    let name = &manifest.manifest.name;
    let descriptors = manifest.descriptors(&config.program);
    debug!(manifest = %name, tasks = descriptors.len(), dry_run = options.dry_run, "manifest loaded");

    if options.dry_run {
        let outcome = provision(&descriptors, manifest.preamble(), &DryRunRunner, |_| {})?;
        eprintln!("dry run: {} commands rendered for {}", outcome.dispatched, name);
        return Ok(());
    }

    println!(
        "Starting task creation for {} ({} tasks)...",
        name,
        descriptors.len()
    );
    let runner = ShellRunner::from_config(&config);
    let outcome = provision(&descriptors, manifest.preamble(), &runner, report)?;
    println!(
        "\nFinished: {} tasks created for {}.",
        outcome.dispatched, name
    );
    Ok(())
}

fn report(event: ProvisionEvent<'_>) {
    match event {
        ProvisionEvent::Dispatching {
            index,
            total,
            label,
        } => println!("\n[{index}/{total}] Executing: {label}..."),
        ProvisionEvent::Created { .. } => println!("Task created successfully."),
        ProvisionEvent::Failed { .. } => eprintln!("Task creation failed."),
    }
}

/// List the built-in profiles with their task counts.
pub fn list_profiles() -> Result<()> {
    for profile in BUILTIN_PROFILES {
        let manifest = profile.load()?;
        println!(
            "{}\t{} tasks\t{}",
            profile.name,
            manifest.tasks.len(),
            manifest.manifest.summary.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

/// Write a default config file.
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_config(path, &SeedConfig::default())?;
    println!("init: wrote {}", path.display());
    Ok(())
}

/// Entry point for the no-argument per-profile binaries.
pub fn seed_builtin(name: &str) -> ! {
    logging::init();
    finish(run_manifest(&RunOptions {
        source: ManifestSource::Builtin(name.to_string()),
        config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
        dry_run: false,
    }))
}

/// Print the error chain (if any) and exit with the matching code.
pub fn finish(result: Result<()>) -> ! {
    match result {
        Ok(()) => std::process::exit(exit_codes::OK),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::FAILED);
        }
    }
}
