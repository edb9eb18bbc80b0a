// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Exec command arguments.
//!
//! ```text
//! exec -C /srv/repo --input user --input token -- push origin main
//!   -> git push origin main   (cwd /srv/repo, stdin "user\ntoken")
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `exec` command.
#[derive(Debug, Clone, Args)]
pub struct ExecArgs {
    /// Working directory for git; defaults to exec.default_cwd.
    #[arg(short = 'C', long = "cwd", value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Line written to git's stdin, e.g. a username or token.
    /// Can be specified multiple times; lines are written in order.
    #[arg(long = "input", value_name = "LINE", action = clap::ArgAction::Append)]
    pub input: Vec<String>,

    /// Print stdout and stderr as a JSON object.
    #[arg(long)]
    pub json: bool,

    /// Arguments passed to git.
    #[arg(last = true, value_name = "GIT ARGS")]
    pub args: Vec<String>,
}
