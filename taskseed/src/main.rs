//! `taskseed` CLI: provision task manifests through an external tracker.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use taskseed::cli::{self, ManifestSource, RunOptions};
use taskseed::io::config::DEFAULT_CONFIG_FILE;
use taskseed::logging;

#[derive(Parser)]
#[command(
    name = "taskseed",
    version,
    about = "Create dependency-ordered tasks through an external task tracker"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create every task of a built-in profile or manifest file, in order.
    Run(RunArgs),
    /// List built-in profiles.
    List,
    /// Write a default `taskseed.toml`.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Built-in profile name (see `taskseed list`).
    profile: Option<String>,
    /// Load tasks from a manifest file instead of a built-in profile.
    #[arg(long, conflicts_with = "profile")]
    manifest: Option<PathBuf>,
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Print assembled commands without running them.
    #[arg(long)]
    dry_run: bool,
}

impl RunArgs {
    fn into_options(self) -> Result<RunOptions> {
        let source = match (self.profile, self.manifest) {
            (Some(name), None) => ManifestSource::Builtin(name),
            (None, Some(path)) => ManifestSource::File(path),
            _ => bail!("run needs a profile name or --manifest <PATH>"),
        };
        Ok(RunOptions {
            source,
            config_path: self.config,
            dry_run: self.dry_run,
        })
    }
}

fn main() {
    logging::init();
    cli::finish(run());
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => cli::run_manifest(&args.into_options()?),
        Command::List => cli::list_profiles(),
        Command::Init { force, config } => cli::init_config(&config, force),
    }
}
