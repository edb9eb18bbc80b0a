// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! output() / output_async()
//!              |
//!              v
//!     std_command()
//!     args, cwd, env, stdio
//!              |
//!              v
//!          spawn()
//!              |
//!     stdin writer (if content)  ||  wait_with_output()
//!              |
//!              v
//!       ProcessOutput
//!    { exit_code, stdout, stderr }
//!
//! run() = output() + non-zero exit --> ProcessError::NonZeroExit
//! ```

use std::io::{self, Write};
use std::process::{Command, ExitStatus, Output, Stdio};
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, trace};

use super::builder::{ProcessBuilder, ProcessOutput};
use crate::error::{ProcessError, VendorResult};

impl ProcessBuilder {
    /// Returns the display name for this process.
    pub(crate) fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging).
    #[must_use]
    pub fn command_line(&self) -> String {
        use std::fmt::Write as _;

        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns the process, feeds stdin if configured, and waits for it to exit.
    ///
    /// Blocks the calling thread. A non-zero exit is not an error here; it is
    /// reported through [`ProcessOutput::exit_code`].
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the process cannot be spawned, its stdin
    /// cannot be written, or its output cannot be collected.
    pub fn output(&self) -> VendorResult<ProcessOutput> {
        let cmd_line = self.log_launch();
        let mut child = self
            .std_command()
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;
        trace!(process = %self.display_name(), pid = child.id(), "spawned");

        let (output, written) = match (self.stdin_content(), child.stdin.take()) {
            (Some(content), Some(stdin)) => std::thread::scope(|scope| {
                let writer = scope.spawn(move || write_stdin(stdin, content.as_bytes()));
                let output = child.wait_with_output();
                let written = writer
                    .join()
                    .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
                (output, written)
            }),
            _ => (child.wait_with_output(), Ok(())),
        };

        self.finish(&cmd_line, output, written)
    }

    /// Async counterpart of [`ProcessBuilder::output`] on the tokio runtime.
    ///
    /// # Errors
    ///
    /// Same as [`ProcessBuilder::output`].
    pub async fn output_async(&self) -> VendorResult<ProcessOutput> {
        let cmd_line = self.log_launch();
        let mut command = tokio::process::Command::from(self.std_command());
        command.kill_on_drop(true);

        let mut child = command.spawn().map_err(|source| ProcessError::SpawnFailed {
            command: cmd_line.clone(),
            source,
        })?;
        trace!(process = %self.display_name(), pid = ?child.id(), "spawned");

        let stdin = child.stdin.take();
        let content = self.stdin_content().map(str::to_owned);
        let write = async move {
            match (stdin, content) {
                (Some(mut stdin), Some(content)) => {
                    ignore_broken_pipe(stdin.write_all(content.as_bytes()).await)
                }
                _ => Ok(()),
            }
        };

        let (written, output) = tokio::join!(write, child.wait_with_output());
        self.finish(&cmd_line, output, written)
    }

    /// Like [`ProcessBuilder::output`], but a non-zero exit is an error.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError::NonZeroExit` carrying the trimmed stderr if the
    /// process fails, or any error from [`ProcessBuilder::output`].
    pub fn run(&self) -> VendorResult<ProcessOutput> {
        let output = self.output()?;
        if !output.success() {
            let stderr = output.stderr_lossy().trim().to_string();
            error!(process = %self.display_name(), code = output.exit_code(), stderr = %stderr, "process failed");
            return Err(ProcessError::NonZeroExit {
                command: self.command_line(),
                code: output.exit_code(),
                stderr,
            }
            .into());
        }
        Ok(output)
    }

    fn log_launch(&self) -> String {
        let cmd_line = self.command_line();
        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");
        cmd_line
    }

    fn finish(
        &self,
        cmd_line: &str,
        output: io::Result<Output>,
        written: io::Result<()>,
    ) -> VendorResult<ProcessOutput> {
        let output = output.map_err(|source| ProcessError::OutputFailed {
            command: cmd_line.to_string(),
            source,
        })?;
        written.map_err(|source| ProcessError::StdinFailed {
            command: cmd_line.to_string(),
            source,
        })?;

        let exit_code = exit_code(output.status);
        trace!(process = %self.display_name(), exit_code, "completed");
        Ok(ProcessOutput::new(exit_code, output.stdout, output.stderr))
    }

    /// Builds the std Command from this builder's configuration.
    fn std_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        if let Some(env) = self.environment() {
            command.env_clear();
            command.envs(env.iter());
        }
        command.envs(self.env_overrides().iter().map(|(k, v)| (k, v)));

        if self.stdin_content().is_some() {
            command.stdin(Stdio::piped());
        } else {
            command.stdin(Stdio::inherit());
        }
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());

        command
    }
}

/// Writes `content` and closes the pipe. A child that exits without reading
/// its input is not an error.
fn write_stdin(mut stdin: impl Write, content: &[u8]) -> io::Result<()> {
    ignore_broken_pipe(stdin.write_all(content))
}

fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Maps an exit status to a code; a signal death becomes the negated signal number.
pub(crate) fn exit_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    status.code().unwrap_or(-1)
}
