//! CLI for movieseed.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use movieseed_core::config::{self, SeedLayout};
use movieseed_core::materialize::Materializer;
use std::path::PathBuf;

use commands::{run_completions, run_config, run_list, run_seed, run_verify};

/// Top-level CLI for movieseed.
#[derive(Debug, Parser)]
#[command(name = "movieseed")]
#[command(about = "Create a demo movie library: one folder and video copy per title", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub paths: PathArgs,

    /// Defaults to `seed` when omitted.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Overrides for the paths in config.toml.
#[derive(Debug, Args)]
pub struct PathArgs {
    /// Directory that relative paths resolve against (default: current directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Placeholder video copied into every folder.
    #[arg(long, global = true, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Root directory that receives the movie folders.
    #[arg(long, global = true, value_name = "DIR")]
    pub movies_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Create missing movie folders and videos (the default).
    Seed,

    /// Print the catalog with sanitized folder names and collisions.
    List,

    /// Check every video against the source by SHA-256.
    Verify,

    /// Show the config file, writing the defaults first if it does not exist.
    Config,

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl PathArgs {
    /// Config values with these overrides applied.
    fn apply(&self, mut cfg: config::SeedConfig) -> config::SeedConfig {
        if let Some(base) = &self.base_dir {
            cfg.base_dir = Some(base.clone());
        }
        if let Some(source) = &self.source {
            cfg.source_file = source.clone();
        }
        if let Some(dir) = &self.movies_dir {
            cfg.movies_dir = dir.clone();
        }
        cfg
    }

    fn layout(&self) -> Result<SeedLayout> {
        let cfg = config::load().context("load config")?;
        tracing::debug!("loaded config: {:?}", cfg);
        let cwd = std::env::current_dir().context("resolve current directory")?;
        Ok(self.apply(cfg).layout(&cwd))
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command.unwrap_or(CliCommand::Seed) {
            CliCommand::Seed => run_seed(&Materializer::new(cli.paths.layout()?))?,
            CliCommand::List => run_list(&Materializer::new(cli.paths.layout()?))?,
            CliCommand::Verify => run_verify(&Materializer::new(cli.paths.layout()?))?,
            CliCommand::Config => run_config()?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
