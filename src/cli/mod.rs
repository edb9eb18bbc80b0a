// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for git-vendor using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! git-vendor [global options] <command>
//! exec [-C DIR] [--input LINE]... [--json] -- <git args>
//! bootstrap
//! options
//! inis
//! version
//! ```

pub mod exec;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::exec::ExecArgs;
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Vendored git bootstrap and command runner.
#[derive(Debug, Parser)]
#[command(
    name = "git-vendor",
    author,
    version,
    about = "Run git, falling back to a vendored copy",
    long_about = "git-vendor Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Runs git subcommands. If no git is found on PATH, a bundled\n\
                  git-<version>.tar is unpacked into the vendor root and used\n\
                  instead. Do `git-vendor exec -- status` to run `git status`.",
    after_help = "CONFIG FILES:\n\n\
                  git-vendor reads `git-vendor.toml` from the current directory if\n\
                  present. Additional files given with --ini are loaded after it,\n\
                  then GIT_VENDOR_* environment variables (GIT_VENDOR_VENDOR__ROOT\n\
                  sets vendor.root), then command-line options."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Lists the config files used.
    Inis,

    /// Resolves git and shows which copy will be used.
    Bootstrap,

    /// Runs a git command.
    Exec(ExecArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
