//! CLI for linkfetch.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linkfetch_core::config::{self, LinkfetchConfig};
use std::path::PathBuf;

use commands::{run_download, show_config, RunOverrides};

/// Top-level CLI for linkfetch.
#[derive(Debug, Parser)]
#[command(name = "linkfetch")]
#[command(about = "linkfetch: download every URL listed in a text file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every link in the links file, skipping files that already exist.
    Run {
        /// Text file with one URL per line (overrides `links_file` from config).
        #[arg(long, value_name = "FILE")]
        links: Option<PathBuf>,
        /// Directory to save files into (overrides `save_dir` from config).
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
        /// Run-log verbosity, 0-3 (overrides `log_level` from config).
        #[arg(long, value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=3))]
        level: Option<u8>,
        /// Directory for the `download_log_*.txt` file (overrides `log_dir` from config).
        #[arg(long, value_name = "DIR")]
        log_dir: Option<PathBuf>,
    },

    /// Show the config file location and its values.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Run {
                links,
                out,
                level,
                log_dir,
            } => {
                let overrides = RunOverrides {
                    links,
                    out,
                    level,
                    log_dir,
                };
                let cfg = config_or_default(config::load_or_init());
                run_download(&cfg, overrides)?;
            }
            CliCommand::Config => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                show_config(&cfg)?;
            }
        }

        Ok(())
    }
}

/// A missing or broken config file should not stop a run whose flags cover it.
fn config_or_default(loaded: Result<LinkfetchConfig>) -> LinkfetchConfig {
    match loaded {
        Ok(cfg) => {
            tracing::debug!("loaded config: {:?}", cfg);
            cfg
        }
        Err(e) => {
            tracing::warn!("config unavailable, using defaults: {:#}", e);
            LinkfetchConfig::default()
        }
    }
}

#[cfg(test)]
mod tests;
