// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use git_vendor::cli::{Cli, Command};
use git_vendor::cmd::exec::exec_options;
use std::path::Path;

// =============================================================================
// Simple Commands
// =============================================================================

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["git-vendor", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_options_and_inis() {
    let cli = Cli::try_parse_from(["git-vendor", "options"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Options)));

    let cli = Cli::try_parse_from(["git-vendor", "inis"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Inis)));
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["git-vendor"]).unwrap();
    assert!(cli.command.is_none());
}

// =============================================================================
// Exec Command
// =============================================================================

#[test]
fn cli_exec_to_options() {
    let cli = Cli::try_parse_from([
        "git-vendor",
        "--log-file",
        "/tmp/git-vendor.log",
        "exec",
        "--cwd",
        "/srv/repo",
        "--input",
        "user",
        "--",
        "clone",
        "-q",
        "https://example.com/repo.git",
    ])
    .unwrap();

    let Some(Command::Exec(args)) = &cli.command else {
        panic!("expected exec command");
    };
    let opts = exec_options(args);
    assert_eq!(opts.cwd(), Some(Path::new("/srv/repo")));
    assert_eq!(opts.stdin_payload().as_deref(), Some("user"));
    assert_eq!(args.args, ["clone", "-q", "https://example.com/repo.git"]);

    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        (
            "global.log_file",
            "/tmp/git-vendor.log",
        ),
    ]
    "#);
}

#[test]
fn cli_exec_git_flags_need_separator() {
    assert!(Cli::try_parse_from(["git-vendor", "exec", "--depth", "1"]).is_err());
}
