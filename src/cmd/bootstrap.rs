// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bootstrap command implementation for git-vendor.

use crate::config::Config;
use crate::error::Result;
use crate::git::toolchain::{self, Toolchain, ToolchainSource};

/// Describes the resolved toolchain, one `key = value` per line.
#[must_use]
pub fn describe_toolchain(toolchain: &Toolchain) -> Vec<String> {
    let source = match toolchain.source() {
        ToolchainSource::Host => "host",
        ToolchainSource::Vendored { extracted: true } => "vendored (extracted)",
        ToolchainSource::Vendored { extracted: false } => "vendored",
    };

    let mut lines = vec![
        format!("source  = {source}"),
        format!("program = {}", toolchain.program().display()),
    ];
    let overlay = toolchain.overlay();
    if let Some(dir) = overlay.path_append() {
        lines.push(format!("PATH   += {}", dir.display()));
    }
    lines.extend(overlay.vars().map(|(key, value)| format!("{key} = {value}")));
    lines
}

/// Main handler for bootstrap command.
///
/// # Errors
///
/// Returns an error if no host git exists and the bundled archive cannot
/// provide one.
pub fn run_bootstrap_command(config: &Config) -> Result<()> {
    let toolchain = toolchain::init(config)?;
    for line in describe_toolchain(toolchain) {
        println!("{line}");
    }
    Ok(())
}
