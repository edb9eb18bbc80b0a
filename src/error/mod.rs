// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            VendorError (~24 bytes)
//!                    |
//!    +--------+------+-----+--------+-------+
//!    |        |            |        |       |
//!    v        v            v        v       v
//!  Exec   Bootstrap     Config   Process  Io/Other
//!  Box       Box          Box      Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Exec       command, returncode, stdout, stderr
//!   Bootstrap  ArchiveMissing, ExtractFailed, BinaryMissing, Unresolved
//!   Config     ParseError, MissingKey, InvalidValue
//!   Process    SpawnFailed, NonZeroExit, StdinFailed
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`VendorError`].
pub type VendorResult<T> = std::result::Result<T, VendorError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum VendorError {
    /// `git` ran and exited with a non-zero status.
    #[error("git execution error: {0}")]
    Exec(#[from] Box<GitExecutionError>),

    /// No usable `git` could be provided.
    #[error("bootstrap error: {0}")]
    Bootstrap(#[from] Box<BootstrapError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// The child process could not be driven.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl VendorError {
    /// Returns the execution failure if this error is one.
    #[must_use]
    pub fn as_exec(&self) -> Option<&GitExecutionError> {
        match self {
            Self::Exec(e) => Some(e),
            _ => None,
        }
    }
}

// --- From implementations for boxing ---

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for VendorError {
                fn from(err: $error) -> Self {
                    VendorError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitExecutionError => Exec,
    BootstrapError => Bootstrap,
    ConfigError => Config,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Execution Errors ---

/// A `git` child process exited with a non-zero status.
///
/// Carries the full argument vector and both captured streams for diagnostics.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("command={command:?} returncode={code} stdout=\"{stdout}\" stderr=\"{stderr}\"")]
pub struct GitExecutionError {
    /// The argument vector, starting with `git`.
    pub command: Vec<String>,
    /// Exit code (negated signal number when killed by a signal).
    pub code: i32,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

// --- Bootstrap Errors ---

/// Failures while providing a vendored `git`.
#[derive(Debug, Clone, Error)]
pub enum BootstrapError {
    /// The bundled archive does not exist.
    #[error("git archive not found: {path}")]
    ArchiveMissing { path: String },

    /// Extracting the bundled archive failed.
    #[error("failed to extract {archive} into {root}: {message}")]
    ExtractFailed {
        archive: String,
        root: String,
        message: String,
    },

    /// Extraction finished but the expected binary is absent.
    #[error("git binary missing after extraction: {path}")]
    BinaryMissing { path: String },

    /// Toolchain requested from a resolution that never ran.
    #[error("git resolution has not run")]
    Unresolved,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration sources.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}: {stderr}")]
    NonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },

    /// Writing to the child's stdin failed.
    #[error("failed to write stdin of process '{command}': {source}")]
    StdinFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Waiting for the child or reading its output failed.
    #[error("failed to read output from process '{command}': {source}")]
    OutputFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
