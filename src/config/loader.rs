// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered `Config` assembly.
//!
//! Sources merge in the order they are added; the `GIT_VENDOR_*` layer is
//! attached last at `build()`, so it sits above every file. `set()` overrides
//! sit above everything.
//!
//! ```text
//! git-vendor.toml?  --ini FILE...  "<string>"
//!         \              |             /
//!          +------ merged in order ----+
//!                         |
//!            GIT_VENDOR_<SECTION>__<KEY>
//!                         |
//!                 set(key, value)
//!                         |
//!       try_deserialize --> validate --> Config
//! ```

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{ConfigError, Result};

/// Collects configuration sources and records which files took part.
pub struct ConfigLoader {
    layers: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    files: Vec<(&'static str, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            layers: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Layers a TOML file that must exist.
    ///
    /// Nothing is read until `build()`, which then fails on a missing file.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.layer_file(path.as_ref(), true)
    }

    /// Layers a TOML file if it exists. Only files present now are listed
    /// by `format_loaded_files`.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        self.layer_file(path.as_ref(), false)
    }

    /// Layers inline TOML, listed as `<string>`.
    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.layers = self
            .layers
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files.push(("string", PathBuf::from("<string>")));
        self
    }

    fn layer_file(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.layers = self.layers.add_source(source);
        match (required, path.exists()) {
            (true, _) => self.files.push(("file", path.to_path_buf())),
            (false, true) => self.files.push(("optional", path.to_path_buf())),
            (false, false) => {}
        }
        self
    }

    /// Layers `<PREFIX>_<SECTION>__<KEY>` variables, e.g.
    /// `GIT_VENDOR_VENDOR__ROOT` for `vendor.root`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Pins `key` (dotted, e.g. `vendor.root`) above every other layer.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` for a malformed key path.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.layers = self
            .layers
            .set_override(key, value)
            .map_err(|e| ConfigError::ParseError {
                path: format!("<override {key}>"),
                message: e.to_string(),
            })?;
        Ok(self)
    }

    /// Merges every layer into a validated `Config`.
    ///
    /// # Errors
    ///
    /// Fails on a missing required file, TOML that does not parse, a key
    /// `Config` does not know, or a value `Config::validate` rejects.
    pub fn build(self) -> Result<Config> {
        let mut layers = self.layers;
        if let Some(prefix) = &self.env_prefix {
            let vars = Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true);
            layers = layers.add_source(vars);
        }
        let config: Config = layers.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Files in merge order, tagged `file`, `optional` or `string`.
    #[must_use]
    pub fn loaded_files(&self) -> &[(&'static str, PathBuf)] {
        &self.files
    }

    /// One `N. [kind] path` line per file, in merge order.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        (1..)
            .zip(&self.files)
            .map(|(n, (kind, path))| format!("{n}. [{kind}] {}", path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
