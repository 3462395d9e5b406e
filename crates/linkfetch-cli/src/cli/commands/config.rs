//! `linkfetch config` – show where the config lives and what it says.

use anyhow::Result;
use linkfetch_core::config::{self, LinkfetchConfig};
use linkfetch_core::logging;

pub fn show_config(cfg: &LinkfetchConfig) -> Result<()> {
    println!("Config file: {}", config::config_path()?.display());
    println!("  links_file = {}", cfg.links_file.display());
    println!("  save_dir   = {}", cfg.save_dir.display());
    println!("  log_level  = {}", cfg.log_level);
    match &cfg.log_dir {
        Some(dir) => println!("  log_dir    = {}", dir.display()),
        None => println!("  log_dir    = (current directory)"),
    }
    if let Ok(path) = logging::diagnostics_log_path() {
        println!("Diagnostics: {}", path.display());
    }
    Ok(())
}
