// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Running `git` subcommands.
//!
//! ```text
//! exec_command(args, opts)            GitExecutor::exec / exec_async
//!          |                                     |
//!   Toolchain::global()                          |
//!   toolchain::default_cwd() ------------> prepare()
//!                                   argv  = ["git", ...args]
//!                                   cwd   = opts.cwd | default_cwd
//!                                   env   = opts.env + overlay
//!                                         | inherited env + overlay vars
//!                                   stdin = clinput joined by LINE_SEPARATOR
//!                                                |
//!                                         ProcessBuilder
//!                                                |
//!                          exit 0 --> CommandOutput { stdout, stderr }
//!                          else   --> GitExecutionError
//! ```

use bon::Builder;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use super::layout::GIT_PROGRAM;
use super::toolchain::{self, Toolchain};
use crate::core::env::container::Env;
use crate::core::process::builder::{ProcessBuilder, ProcessOutput};
use crate::error::{GitExecutionError, VendorResult};

/// Separator placed between input lines written to stdin.
pub const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Per-call options for a `git` invocation.
///
/// ```rust
/// use git_vendor::git::exec::ExecOptions;
///
/// let opts = ExecOptions::builder()
///     .with_cwd("/srv/repo")
///     .with_clinput(vec!["user".to_string(), "token".to_string()])
///     .build();
/// assert_eq!(opts.stdin_payload().as_deref(), Some("user\ntoken"));
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct ExecOptions {
    /// Working directory; defaults to the executor's default directory.
    #[builder(setters(name = with_cwd), into)]
    cwd: Option<PathBuf>,
    /// Base environment; defaults to the current process environment.
    /// The toolchain overlay is applied on top either way.
    #[builder(setters(name = with_env))]
    env: Option<Env>,
    /// Lines written to stdin. Without them stdin is inherited.
    #[builder(setters(name = with_clinput))]
    clinput: Option<Vec<String>>,
}

impl ExecOptions {
    #[must_use]
    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    #[must_use]
    pub const fn env(&self) -> Option<&Env> {
        self.env.as_ref()
    }

    #[must_use]
    pub fn clinput(&self) -> Option<&[String]> {
        self.clinput.as_deref()
    }

    /// The bytes written to stdin: input lines joined by [`LINE_SEPARATOR`],
    /// without a trailing separator.
    #[must_use]
    pub fn stdin_payload(&self) -> Option<String> {
        self.clinput.as_ref().map(|lines| lines.join(LINE_SEPARATOR))
    }
}

/// Captured streams of a successful `git` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl CommandOutput {
    #[must_use]
    pub fn stdout(&self) -> &[u8] {
        &self.stdout
    }

    #[must_use]
    pub fn stderr(&self) -> &[u8] {
        &self.stderr
    }

    #[must_use]
    pub fn stdout_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stdout)
    }

    #[must_use]
    pub fn stderr_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stderr)
    }

    /// Always zero; failures are reported as [`GitExecutionError`].
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        0
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>) {
        (self.stdout, self.stderr)
    }
}

/// Runs `git` from a resolved toolchain.
#[derive(Debug, Clone)]
pub struct GitExecutor<'a> {
    toolchain: &'a Toolchain,
    default_cwd: PathBuf,
}

impl<'a> GitExecutor<'a> {
    /// Creates an executor whose default working directory is the system temp dir.
    #[must_use]
    pub fn new(toolchain: &'a Toolchain) -> Self {
        Self {
            toolchain,
            default_cwd: std::env::temp_dir(),
        }
    }

    #[must_use]
    pub fn with_default_cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.default_cwd = dir.into();
        self
    }

    #[must_use]
    pub fn default_cwd(&self) -> &Path {
        &self.default_cwd
    }

    #[must_use]
    pub const fn toolchain(&self) -> &Toolchain {
        self.toolchain
    }

    /// The argument vector as reported in logs and errors.
    #[must_use]
    pub fn command_line<S: AsRef<str>>(args: &[S]) -> Vec<String> {
        std::iter::once(GIT_PROGRAM.to_string())
            .chain(args.iter().map(|a| a.as_ref().to_string()))
            .collect()
    }

    /// Runs `git <args>` and waits for it to exit.
    ///
    /// # Errors
    ///
    /// Returns `VendorError::Exec` if `git` exits non-zero, or
    /// `VendorError::Process` if it cannot be spawned or driven.
    pub fn exec<S: AsRef<str>>(&self, args: &[S], opts: &ExecOptions) -> VendorResult<CommandOutput> {
        let (command, process) = self.prepare(args, opts);
        let output = process.output()?;
        finish(command, output)
    }

    /// Async counterpart of [`GitExecutor::exec`].
    ///
    /// # Errors
    ///
    /// Same as [`GitExecutor::exec`].
    pub async fn exec_async<S: AsRef<str>>(
        &self,
        args: &[S],
        opts: &ExecOptions,
    ) -> VendorResult<CommandOutput> {
        let (command, process) = self.prepare(args, opts);
        let output = process.output_async().await?;
        finish(command, output)
    }

    fn prepare<S: AsRef<str>>(&self, args: &[S], opts: &ExecOptions) -> (Vec<String>, ProcessBuilder) {
        let command = Self::command_line(args);
        info!("executing git command: \"{}\"", command.join(" "));

        let mut process = ProcessBuilder::new(self.toolchain.program())
            .name(GIT_PROGRAM)
            .args(&command[1..])
            .cwd(opts.cwd().unwrap_or(self.default_cwd.as_path()));

        // Without a caller env the child inherits ours, non-UTF-8 entries included.
        match opts.env() {
            Some(base) => process = process.env(self.toolchain.environment(Some(base))),
            None => {
                for (key, value) in self.toolchain.inherited_vars() {
                    process = process.env_var(key, value);
                }
            }
        }

        if let Some(payload) = opts.stdin_payload() {
            info!("inputting command line arguments");
            process = process.stdin(payload);
        }

        (command, process)
    }
}

fn finish(command: Vec<String>, output: ProcessOutput) -> VendorResult<CommandOutput> {
    if !output.success() {
        let code = output.exit_code();
        error!("git failed with {code} returncode");
        let (stdout, stderr) = output.into_streams();
        return Err(GitExecutionError {
            command,
            code,
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
        }
        .into());
    }

    let (stdout, stderr) = output.into_streams();
    Ok(CommandOutput { stdout, stderr })
}

/// Runs `git <args>` with the process-wide toolchain.
///
/// Calls without `cwd` run in the configured `exec.default_cwd`, the system
/// temp dir unless `git-vendor.toml`, `GIT_VENDOR_EXEC__DEFAULT_CWD` or the
/// config given to [`init`](super::toolchain::init) says otherwise.
///
/// # Errors
///
/// Returns `VendorError::Bootstrap` if no `git` could be provided, otherwise
/// the errors of [`GitExecutor::exec`].
pub fn exec_command<S: AsRef<str>>(args: &[S], opts: &ExecOptions) -> VendorResult<CommandOutput> {
    GitExecutor::new(Toolchain::global()?)
        .with_default_cwd(toolchain::default_cwd())
        .exec(args, opts)
}
