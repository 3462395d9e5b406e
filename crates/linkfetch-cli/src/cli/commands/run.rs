//! `linkfetch run` – download every link in the links file.

use anyhow::{Context, Result};
use linkfetch_core::config::LinkfetchConfig;
use linkfetch_core::{Downloader, DownloaderOptions, RunSummary};
use std::path::PathBuf;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOverrides {
    pub links: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub level: Option<u8>,
    pub log_dir: Option<PathBuf>,
}

impl RunOverrides {
    pub fn apply(self, cfg: &LinkfetchConfig) -> LinkfetchConfig {
        LinkfetchConfig {
            links_file: self.links.unwrap_or_else(|| cfg.links_file.clone()),
            save_dir: self.out.unwrap_or_else(|| cfg.save_dir.clone()),
            log_level: self.level.unwrap_or(cfg.log_level),
            log_dir: self.log_dir.or_else(|| cfg.log_dir.clone()),
        }
    }
}

fn print_summary(summary: &RunSummary) {
    println!("  Downloaded: {}", summary.downloaded);
    println!("  Skipped:    {}", summary.skipped);
    println!("  Errors:     {}", summary.errored);
}

pub fn run_download(cfg: &LinkfetchConfig, overrides: RunOverrides) -> Result<()> {
    let effective = overrides.apply(cfg);
    effective.validate()?;

    let mut downloader = Downloader::new(DownloaderOptions::from_config(&effective));
    let log_path = downloader.log_path().to_path_buf();
    let summary = downloader
        .run()
        .with_context(|| format!("download aborted, see {}", log_path.display()))?;

    println!(
        "Download finished. See {} for details.",
        log_path.display()
    );
    print_summary(&summary);
    Ok(())
}
