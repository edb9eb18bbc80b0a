// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The resolved `git` program and the environment it needs.
//!
//! ```text
//!   Toolchain::global() / init(config)
//!     global() loads Config::ambient() (git-vendor.toml + GIT_VENDOR_*)
//!                |
//!                v
//!   OnceLock<Global { toolchain: Result<Toolchain, BootstrapError>, default_cwd }>
//!     written once, read by every exec
//!                |
//!                v
//!   Toolchain { program, source, overlay }
//!     Host      overlay empty
//!     Vendored  PATH += <root>/usr/bin
//!               GIT_TEMPLATE_DIR, GIT_EXEC_PATH, LD_LIBRARY_PATH
//! ```
//!
//! The process environment is never written; the overlay is applied to the
//! environment handed to each child instead. Without a caller environment the
//! child inherits ours as-is and only the overlay variables are set on top.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

use super::bootstrap::bootstrap;
use super::layout::{EXEC_PATH_VAR, LIBRARY_PATH_VAR, TEMPLATE_DIR_VAR, VendorLayout};
use crate::config::Config;
use crate::core::env::container::Env;
use crate::core::env::types::{PATH_SEPARATOR, PATH_VAR};
use crate::error::{BootstrapError, VendorResult};

static GLOBAL: OnceLock<Global> = OnceLock::new();

/// What the first initialisation settled for the whole process.
#[derive(Debug)]
struct Global {
    toolchain: Result<Toolchain, BootstrapError>,
    default_cwd: PathBuf,
}

impl Global {
    fn from_config(config: &Config) -> Self {
        Self {
            toolchain: bootstrap(config),
            default_cwd: config.exec.default_cwd(),
        }
    }
}

/// Where the resolved `git` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolchainSource {
    /// Found on the host search path.
    Host,
    /// The unpacked vendored copy. `extracted` is true if this process unpacked it.
    Vendored { extracted: bool },
}

/// Environment additions required by a vendored `git`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverlay {
    path_append: Option<PathBuf>,
    vars: Vec<(&'static str, String)>,
}

impl EnvOverlay {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path_append.is_none() && self.vars.is_empty()
    }

    /// Directory appended to `PATH`, if any.
    #[must_use]
    pub fn path_append(&self) -> Option<&Path> {
        self.path_append.as_deref()
    }

    /// Variables set outright, in application order.
    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// An immutable, resolved `git` toolchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    program: PathBuf,
    source: ToolchainSource,
    overlay: EnvOverlay,
}

impl Toolchain {
    /// A host `git`; the overlay is empty.
    pub fn host(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            source: ToolchainSource::Host,
            overlay: EnvOverlay::default(),
        }
    }

    /// The vendored `git` under `layout`.
    #[must_use]
    pub fn vendored(layout: &VendorLayout, extracted: bool) -> Self {
        let lossy = |p: PathBuf| p.to_string_lossy().into_owned();
        Self {
            program: layout.binary(),
            source: ToolchainSource::Vendored { extracted },
            overlay: EnvOverlay {
                path_append: Some(layout.bin_dir()),
                vars: vec![
                    (TEMPLATE_DIR_VAR, lossy(layout.template_dir())),
                    (EXEC_PATH_VAR, lossy(layout.exec_path())),
                    (LIBRARY_PATH_VAR, lossy(layout.library_dir())),
                ],
            },
        }
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    #[must_use]
    pub const fn source(&self) -> ToolchainSource {
        self.source
    }

    #[must_use]
    pub const fn overlay(&self) -> &EnvOverlay {
        &self.overlay
    }

    /// Applies the overlay to `env`. `PATH` entries already present are not repeated.
    pub fn apply(&self, env: &mut Env) {
        if let Some(dir) = self.overlay.path_append() {
            env.append_path(dir);
        }
        for (key, value) in self.overlay.vars() {
            env.set(key, value);
        }
    }

    /// Returns `base` (or the current process environment) with the overlay applied.
    #[must_use]
    pub fn environment(&self, base: Option<&Env>) -> Env {
        let mut env = base.cloned().unwrap_or_else(crate::core::env::current_env);
        self.apply(&mut env);
        env
    }

    /// The overlay as assignments on top of an inherited environment whose
    /// `PATH` is `path`. The existing `PATH` bytes are kept unchanged.
    #[must_use]
    pub fn overlay_vars(&self, path: Option<&OsStr>) -> Vec<(OsString, OsString)> {
        let mut vars = Vec::new();
        if let Some(dir) = self.overlay.path_append() {
            vars.push((OsString::from(PATH_VAR), appended_path(path, dir)));
        }
        vars.extend(
            self.overlay
                .vars()
                .map(|(key, value)| (OsString::from(key), OsString::from(value))),
        );
        vars
    }

    /// [`Toolchain::overlay_vars`] against the current process `PATH`.
    #[must_use]
    pub fn inherited_vars(&self) -> Vec<(OsString, OsString)> {
        self.overlay_vars(std::env::var_os(PATH_VAR).as_deref())
    }

    /// The process-wide toolchain.
    ///
    /// Unless [`init`] ran earlier, the first access bootstraps from
    /// [`Config::ambient`]: `git-vendor.toml` in the current directory and
    /// `GIT_VENDOR_*` variables. An unreadable configuration falls back to
    /// defaults with a warning.
    ///
    /// # Errors
    ///
    /// Returns the cached `BootstrapError` if resolution failed.
    pub fn global() -> VendorResult<&'static Self> {
        cached(&global_state().toolchain)
    }
}

/// Working directory for calls that name none, taken from `exec.default_cwd`
/// of the configuration the process-wide toolchain was built from.
#[must_use]
pub fn default_cwd() -> &'static Path {
    &global_state().default_cwd
}

fn global_state() -> &'static Global {
    GLOBAL.get_or_init(|| Global::from_config(&ambient_config()))
}

fn ambient_config() -> Config {
    Config::ambient().build().unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable configuration, using defaults");
        Config::default()
    })
}

/// Bootstraps the process-wide toolchain from `config`.
///
/// The first initialisation wins; later calls return the existing toolchain
/// without resolving again. `config.exec.default_cwd` becomes the
/// [`default_cwd`] used by [`exec_command`](super::exec::exec_command).
///
/// # Errors
///
/// Returns a `BootstrapError` if resolution failed, now or on an earlier call.
pub fn init(config: &Config) -> VendorResult<&'static Toolchain> {
    if let Some(existing) = GLOBAL.get() {
        debug!("toolchain already initialised, ignoring new configuration");
        return cached(&existing.toolchain);
    }
    cached(&GLOBAL.get_or_init(|| Global::from_config(config)).toolchain)
}

fn cached(slot: &'static Result<Toolchain, BootstrapError>) -> VendorResult<&'static Toolchain> {
    slot.as_ref().map_err(|e| e.clone().into())
}

fn appended_path(current: Option<&OsStr>, dir: &Path) -> OsString {
    match current {
        Some(path) if std::env::split_paths(path).any(|entry| entry == dir) => path.to_os_string(),
        Some(path) if !path.is_empty() => {
            let mut joined = path.to_os_string();
            joined.push(PATH_SEPARATOR.to_string());
            joined.push(dir);
            joined
        }
        _ => dir.as_os_str().to_os_string(),
    }
}
