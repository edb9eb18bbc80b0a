// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! ```text
//! Config: GlobalConfig, VendorConfig, ExecConfig, ToolsConfig
//!
//! [vendor]
//!   version = "2.4.3"      --> <dir>/git-2.4.3.tar
//!   dir     = <exe dir>/vendor
//!   root    = <temp dir>   --> <root>/usr/bin/git
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Version of the bundled git distribution.
pub const GIT_VERSION: &str = "2.4.3";

/// Name of the directory holding bundled archives, next to the executable.
pub const VENDOR_DIR_NAME: &str = "vendor";

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Location and version of the bundled git distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VendorConfig {
    /// Pinned git version, embedded in the archive name.
    pub version: String,
    /// Directory containing `git-<version>.tar` (default: `<exe dir>/vendor`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    /// Root the archive is unpacked into (default: system temp dir).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

impl Default for VendorConfig {
    fn default() -> Self {
        Self {
            version: GIT_VERSION.to_string(),
            dir: None,
            root: None,
        }
    }
}

impl VendorConfig {
    /// Directory holding the bundled archive.
    #[must_use]
    pub fn vendor_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(|p| p.join(VENDOR_DIR_NAME)))
                .unwrap_or_else(|| PathBuf::from(VENDOR_DIR_NAME))
        })
    }

    /// Archive file name for the pinned version.
    #[must_use]
    pub fn archive_name(&self) -> String {
        format!("git-{}.tar", self.version)
    }

    /// Full path of the bundled archive.
    #[must_use]
    pub fn archive_path(&self) -> PathBuf {
        self.vendor_dir().join(self.archive_name())
    }

    /// Root directory the archive is unpacked into.
    #[must_use]
    pub fn root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// Checks the pinned version is usable in a file name.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the version is empty or contains
    /// a path separator.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let invalid = |message: &str| ConfigError::InvalidValue {
            section: "vendor".to_string(),
            key: "version".to_string(),
            message: message.to_string(),
        };

        if self.version.trim().is_empty() {
            return Err(invalid("version must not be empty"));
        }
        if self.version.contains(['/', '\\']) {
            return Err(invalid("version must not contain path separators"));
        }
        Ok(())
    }
}

/// Defaults for command execution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExecConfig {
    /// Working directory when a call gives none (default: system temp dir).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_cwd: Option<PathBuf>,
}

impl ExecConfig {
    #[must_use]
    pub fn default_cwd(&self) -> PathBuf {
        self.default_cwd.clone().unwrap_or_else(std::env::temp_dir)
    }
}

/// Tool paths configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// tar executable used to unpack the bundled archive.
    pub tar: PathBuf,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            tar: PathBuf::from("tar"),
        }
    }
}
