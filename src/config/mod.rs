// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. local git-vendor.toml (cwd)
//! 3. --ini files
//! 4. GIT_VENDOR_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GIT_VENDOR_VENDOR__ROOT=/var/tmp  → vendor.root = "/var/tmp"
//! GIT_VENDOR_TOOLS__TAR=/bin/bsdtar → tools.tar = "/bin/bsdtar"
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

use loader::ConfigLoader;
use types::{ExecConfig, GlobalConfig, ToolsConfig, VendorConfig};

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "GIT_VENDOR";

/// Name of the optional configuration file looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "git-vendor.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Bundled git distribution.
    pub vendor: VendorConfig,
    /// Command execution defaults.
    pub exec: ExecConfig,
    /// Tool paths.
    pub tools: ToolsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use git_vendor::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("git-vendor.toml")
    ///     .with_env_prefix("GIT_VENDOR")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// A loader for the sources every caller shares: the local
    /// `git-vendor.toml` and `GIT_VENDOR_*` variables, which win over files.
    #[must_use]
    pub fn ambient() -> ConfigLoader {
        Self::builder()
            .add_toml_file_optional(LOCAL_CONFIG_FILE)
            .with_env_prefix(ENV_PREFIX)
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate values that deserialization alone cannot check.
    ///
    /// # Errors
    ///
    /// Returns an error if the vendored version is unusable.
    pub fn validate(&self) -> Result<()> {
        self.vendor.validate()?;
        Ok(())
    }

    /// Format the effective configuration for display, one `key = value` per line.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let fmt = |p: &Option<PathBuf>| {
            p.as_ref()
                .map_or_else(|| "-".to_string(), |p| p.display().to_string())
        };

        let mut options = BTreeMap::new();
        options.insert(
            "global.output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level",
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert("global.log_file", fmt(&self.global.log_file));
        options.insert("vendor.version", self.vendor.version.clone());
        options.insert("vendor.dir", self.vendor.vendor_dir().display().to_string());
        options.insert("vendor.root", self.vendor.root().display().to_string());
        options.insert(
            "vendor.archive",
            self.vendor.archive_path().display().to_string(),
        );
        options.insert(
            "exec.default_cwd",
            self.exec.default_cwd().display().to_string(),
        );
        options.insert("tools.tar", self.tools.tar.display().to_string());

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
