use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/movieseed/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Placeholder video copied into every movie folder.
    pub source_file: PathBuf,
    /// Root directory that receives one folder per movie.
    pub movies_dir: PathBuf,
    /// Extension given to each copy; should match the source's format.
    pub video_extension: String,
    /// Directory that relative paths resolve against (None = current directory).
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            source_file: PathBuf::from("show-stream-demo.mp4"),
            movies_dir: PathBuf::from("movies"),
            video_extension: "mp4".to_string(),
            base_dir: None,
        }
    }
}

/// Concrete paths for one seeding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedLayout {
    pub source: PathBuf,
    pub movies_dir: PathBuf,
    pub video_extension: String,
}

impl SeedConfig {
    /// The file contents `load_or_init` writes for this config.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolve against `base_dir`, or `fallback_base` when the config has none.
    /// Absolute paths are kept as-is.
    pub fn layout(&self, fallback_base: &Path) -> SeedLayout {
        let base = self.base_dir.as_deref().unwrap_or(fallback_base);
        SeedLayout {
            source: base.join(&self.source_file),
            movies_dir: base.join(&self.movies_dir),
            video_extension: self.video_extension.clone(),
        }
    }
}

/// Location of `config.toml`. Does not create any directories.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("movieseed")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from disk, or defaults if there is no config file yet.
/// Never writes.
pub fn load() -> Result<SeedConfig> {
    load_at(&config_path()?)
}

/// Same as [`load`] for an explicit config file path.
pub fn load_at(path: &Path) -> Result<SeedConfig> {
    if !path.exists() {
        return Ok(SeedConfig::default());
    }
    let data = fs::read_to_string(path)?;
    Ok(toml::from_str(&data)?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SeedConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit config file path.
pub fn load_or_init_at(path: &Path) -> Result<SeedConfig> {
    if !path.exists() {
        let default_cfg = SeedConfig::default();
        let toml = default_cfg.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_at(path)
}
