// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Exec command implementation for git-vendor.

use anyhow::Context;
use serde::Serialize;
use std::io::Write;

use crate::cli::exec::ExecArgs;
use crate::config::Config;
use crate::error::{GitExecutionError, Result, VendorError};
use crate::git::exec::{CommandOutput, ExecOptions, GitExecutor};
use crate::git::toolchain;

/// Machine-readable result of one git run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecReport {
    pub command: Vec<String>,
    pub returncode: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecReport {
    #[must_use]
    pub fn success(command: Vec<String>, output: &CommandOutput) -> Self {
        Self {
            command,
            returncode: output.exit_code(),
            stdout: output.stdout_text().into_owned(),
            stderr: output.stderr_text().into_owned(),
        }
    }

    #[must_use]
    pub fn failure(error: &GitExecutionError) -> Self {
        Self {
            command: error.command.clone(),
            returncode: error.code,
            stdout: error.stdout.clone(),
            stderr: error.stderr.clone(),
        }
    }
}

/// Builds the per-call options from the command-line arguments.
#[must_use]
pub fn exec_options(args: &ExecArgs) -> ExecOptions {
    ExecOptions::builder()
        .maybe_with_cwd(args.cwd.clone())
        .maybe_with_clinput((!args.input.is_empty()).then(|| args.input.clone()))
        .build()
}

/// Main handler for exec command.
///
/// # Errors
///
/// Returns an error if git cannot be provided or exits non-zero.
pub async fn run_exec_command(args: &ExecArgs, config: &Config) -> Result<()> {
    let toolchain = toolchain::init(config)?;
    let executor = GitExecutor::new(toolchain).with_default_cwd(config.exec.default_cwd());
    let opts = exec_options(args);

    let result = executor.exec_async(&args.args, &opts).await;

    if args.json {
        let report = match &result {
            Ok(output) => Some(ExecReport::success(
                GitExecutor::command_line(&args.args),
                output,
            )),
            Err(VendorError::Exec(failure)) => Some(ExecReport::failure(failure)),
            Err(_) => None,
        };
        if let Some(report) = report {
            let json =
                serde_json::to_string_pretty(&report).context("failed to serialise report")?;
            println!("{json}");
        }
        result?;
        return Ok(());
    }

    let output = result?;
    std::io::stdout()
        .write_all(output.stdout())
        .context("failed to write stdout")?;
    std::io::stderr()
        .write_all(output.stderr())
        .context("failed to write stderr")?;
    Ok(())
}
