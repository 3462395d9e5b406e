//! CLI parse tests.

use super::{config_or_default, Cli, CliCommand};
use linkfetch_core::config::LinkfetchConfig;
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}


#[test]
fn cli_parse_config() {
    match parse(&["linkfetch", "config"]) {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["linkfetch"]).is_err());
}

#[test]
fn config_load_failure_falls_back_to_defaults() {
    let cfg = config_or_default(Err(anyhow::anyhow!("no XDG config dir")));
    assert_eq!(cfg, LinkfetchConfig::default());
}

#[test]
fn loaded_config_is_kept() {
    let loaded = LinkfetchConfig {
        log_level: 1,
        ..LinkfetchConfig::default()
    };
    assert_eq!(config_or_default(Ok(loaded.clone())), loaded);
}
