use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Highest supported run-log verbosity (link, size and HTTP code on every download).
pub const MAX_LOG_LEVEL: u8 = 3;

/// Global configuration loaded from `~/.config/linkfetch/config.toml`.
///
/// Every value can be overridden per invocation from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkfetchConfig {
    /// Text file with one URL per line.
    pub links_file: PathBuf,
    /// Directory the downloaded files are written to (created if missing).
    pub save_dir: PathBuf,
    /// Run-log verbosity: 0 (forced lines only) up to 3 (per-link size and HTTP code).
    pub log_level: u8,
    /// Directory for `download_log_*.txt`; current directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

impl Default for LinkfetchConfig {
    fn default() -> Self {
        Self {
            links_file: PathBuf::from("images.txt"),
            save_dir: PathBuf::from("downloaded/"),
            log_level: MAX_LOG_LEVEL,
            log_dir: None,
        }
    }
}

impl LinkfetchConfig {
    /// Rejects values the downloader cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.log_level > MAX_LOG_LEVEL {
            anyhow::bail!(
                "log_level must be between 0 and {}, got {}",
                MAX_LOG_LEVEL,
                self.log_level
            );
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkfetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LinkfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let cfg: LinkfetchConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
