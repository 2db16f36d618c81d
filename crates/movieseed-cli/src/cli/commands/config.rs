//! `movieseed config` – print the config file path and its contents.

use anyhow::{Context, Result};
use movieseed_core::config;

pub fn run_config() -> Result<()> {
    let path = config::config_path()?;
    let cfg = config::load_or_init().context("load config")?;
    println!("# {}", path.display());
    print!("{}", cfg.to_toml()?);
    Ok(())
}
