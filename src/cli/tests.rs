// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["git-vendor", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "git-vendor",
        "-l",
        "5",
        "--root",
        "/var/tmp/git",
        "--ini",
        "a.toml",
        "--ini",
        "b.toml",
        "bootstrap",
    ])
    .unwrap();

    assert!(matches!(cli.command, Some(Command::Bootstrap)));
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(
        cli.global.inis,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        (
            "global.output_log_level",
            "5",
        ),
        (
            "global.file_log_level",
            "5",
        ),
        (
            "vendor.root",
            "/var/tmp/git",
        ),
    ]
    "#);
}

#[test]
fn test_parse_rejects_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["git-vendor", "-l", "6", "options"]).is_err());
}

#[test]
fn test_parse_exec() {
    let cli = Cli::try_parse_from([
        "git-vendor",
        "exec",
        "-C",
        "/srv/repo",
        "--input",
        "user",
        "--input",
        "token",
        "--json",
        "--",
        "push",
        "--force",
        "origin",
    ])
    .unwrap();

    let Some(Command::Exec(args)) = cli.command else {
        panic!("expected exec command");
    };
    assert_eq!(args.cwd, Some(PathBuf::from("/srv/repo")));
    assert_eq!(args.input, ["user", "token"]);
    assert!(args.json);
    assert_eq!(args.args, ["push", "--force", "origin"]);
}

#[test]
fn test_parse_exec_without_git_args() {
    let cli = Cli::try_parse_from(["git-vendor", "exec"]).unwrap();
    let Some(Command::Exec(args)) = cli.command else {
        panic!("expected exec command");
    };
    assert!(args.args.is_empty());
    assert!(args.input.is_empty());
    assert!(!args.json);
}
