// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use crate::cli::{Cli, Command};
use clap::{CommandFactory, Parser};

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["envmap", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_names_json() {
    let cli = Cli::try_parse_from(["envmap", "names", "--json"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Names(ref args)) if args.json));
}

#[test]
fn test_parse_get() {
    let cli = Cli::try_parse_from(["envmap", "get", "port", "--raw"]).unwrap();
    let Some(Command::Get(args)) = cli.command else {
        panic!("expected get command");
    };
    assert_eq!(args.attribute, "port");
    assert!(args.raw);
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "envmap", "-l", "5", "-m", "a.toml", "--manifest", "b.toml", "check",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(
        cli.global.manifests,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert!(matches!(cli.command, Some(Command::Check)));
}

#[test]
fn test_log_level_out_of_range_rejected() {
    assert!(Cli::try_parse_from(["envmap", "-l", "7", "check"]).is_err());
}

#[test]
fn test_get_requires_attribute() {
    assert!(Cli::try_parse_from(["envmap", "get"]).is_err());
}

#[test]
fn test_comma_separated_manifests_keep_order() {
    let cli = Cli::try_parse_from(["envmap", "-m", "a.toml,b.toml", "-m", "c.toml", "names"])
        .unwrap();
    assert_eq!(
        cli.global.manifests,
        vec![
            PathBuf::from("a.toml"),
            PathBuf::from("b.toml"),
            PathBuf::from("c.toml")
        ]
    );
}

#[test]
fn test_manifest_after_command_is_rejected() {
    // A manifest after the command would otherwise replace the earlier ones.
    let err = Cli::try_parse_from(["envmap", "-m", "a.toml", "check", "--manifest", "b.toml"])
        .unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
}

#[test]
fn test_log_level_after_command() {
    let cli = Cli::try_parse_from(["envmap", "check", "-l", "4"]).unwrap();
    assert_eq!(cli.global.log_level, Some(4));
}
