//! CLI parse tests.

use super::commands::ConfigAction;
use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_hash_default_algorithm() {
    match parse(&["cpkit", "hash", "node-0"]) {
        CliCommand::Hash { input, algorithm } => {
            assert_eq!(input, "node-0");
            assert_eq!(algorithm, "sha256");
        }
        _ => panic!("expected Hash"),
    }
}

#[test]
fn cli_parse_hash_explicit_algorithm() {
    match parse(&["cpkit", "hash", "node-0", "--algorithm", "fnv64a"]) {
        CliCommand::Hash { algorithm, .. } => assert_eq!(algorithm, "fnv64a"),
        _ => panic!("expected Hash"),
    }
}

#[test]
fn cli_parse_token() {
    match parse(&["cpkit", "token"]) {
        CliCommand::Token => {}
        _ => panic!("expected Token"),
    }
}

#[test]
fn cli_parse_resolve() {
    match parse(&["cpkit", "resolve", "10.0.0.1:2379"]) {
        CliCommand::Resolve { address } => assert_eq!(address, "10.0.0.1:2379"),
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_info() {
    match parse(&["cpkit", "info"]) {
        CliCommand::Info => {}
        _ => panic!("expected Info"),
    }
}

#[test]
fn cli_parse_config_show_and_path() {
    match parse(&["cpkit", "config", "show"]) {
        CliCommand::Config {
            action: ConfigAction::Show,
        } => {}
        _ => panic!("expected Config Show"),
    }
    match parse(&["cpkit", "config", "path"]) {
        CliCommand::Config {
            action: ConfigAction::Path,
        } => {}
        _ => panic!("expected Config Path"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["cpkit", "watch"]).is_err());
}
