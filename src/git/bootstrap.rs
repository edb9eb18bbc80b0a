// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolution of a usable `git`.
//!
//! ```text
//!                 Unresolved
//!                     |
//!          plan(find_host_git, is_unpacked)
//!        /            |              \
//!   UseHost       UseUnpacked       Extract
//!      |              |                |
//!      |              |          Unpack::unpack
//!      |              |           /          \
//!      v              v          v            v
//!  HostFound   Vendored{false}  Vendored{true}  Failed
//! ```

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::extract::{TarExtractor, Unpack};
use super::layout::{GIT_PROGRAM, VendorLayout};
use super::toolchain::Toolchain;
use crate::config::Config;
use crate::core::env::types::PATH_VAR;
use crate::error::BootstrapError;

/// Looks `git` up on `search_path`, resolving relative entries against `cwd`.
#[must_use]
pub fn find_host_git(search_path: Option<&OsStr>, cwd: &Path) -> Option<PathBuf> {
    which::which_in(GIT_PROGRAM, search_path, cwd).ok()
}

/// What bootstrap has to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapPlan {
    UseHost(PathBuf),
    UseUnpacked,
    Extract,
}

/// Decides the plan from what is already available.
#[must_use]
pub fn plan(host: Option<PathBuf>, unpacked_present: bool) -> BootstrapPlan {
    match (host, unpacked_present) {
        (Some(path), _) => BootstrapPlan::UseHost(path),
        (None, true) => BootstrapPlan::UseUnpacked,
        (None, false) => BootstrapPlan::Extract,
    }
}

/// Outcome of a resolution.
#[derive(Debug, Clone, Default)]
pub enum ResolutionState {
    #[default]
    Unresolved,
    HostFound(PathBuf),
    Vendored {
        extracted: bool,
    },
    Failed(BootstrapError),
}

impl ResolutionState {
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::HostFound(_) | Self::Vendored { .. })
    }

    /// Builds the toolchain for a resolved state.
    ///
    /// # Errors
    ///
    /// Returns the failure reason, or `BootstrapError::Unresolved` if the
    /// resolution never ran.
    pub fn into_toolchain(self, layout: &VendorLayout) -> Result<Toolchain, BootstrapError> {
        match self {
            Self::HostFound(path) => Ok(Toolchain::host(path)),
            Self::Vendored { extracted } => {
                info!("setting up environment variables");
                let toolchain = Toolchain::vendored(layout, extracted);
                debug!(
                    program = %toolchain.program().display(),
                    root = %layout.root().display(),
                    "vendored toolchain ready"
                );
                Ok(toolchain)
            }
            Self::Failed(reason) => Err(reason),
            Self::Unresolved => Err(BootstrapError::Unresolved),
        }
    }
}

/// Drives one resolution against a search path, a layout and an extractor.
#[derive(Debug)]
pub struct Resolver<U> {
    search_path: Option<OsString>,
    cwd: PathBuf,
    layout: VendorLayout,
    archive: PathBuf,
    unpacker: U,
}

impl<U: Unpack> Resolver<U> {
    /// Creates a resolver that searches the current process `PATH`.
    pub fn new(layout: VendorLayout, archive: impl Into<PathBuf>, unpacker: U) -> Self {
        Self {
            search_path: std::env::var_os(PATH_VAR),
            cwd: std::env::current_dir().unwrap_or_else(|_| std::env::temp_dir()),
            layout,
            archive: archive.into(),
            unpacker,
        }
    }

    /// Replaces the search path used to look for a host `git`.
    #[must_use]
    pub fn with_search_path(mut self, search_path: Option<OsString>) -> Self {
        self.search_path = search_path;
        self
    }

    #[must_use]
    pub const fn layout(&self) -> &VendorLayout {
        &self.layout
    }

    #[must_use]
    pub const fn unpacker(&self) -> &U {
        &self.unpacker
    }

    /// Runs the plan and returns the terminal state.
    pub fn resolve(&self) -> ResolutionState {
        let host = find_host_git(self.search_path.as_deref(), &self.cwd);
        match plan(host, self.layout.is_unpacked()) {
            BootstrapPlan::UseHost(path) => {
                debug!(git = %path.display(), "using host git");
                ResolutionState::HostFound(path)
            }
            BootstrapPlan::UseUnpacked => {
                info!("git not found, installing using local copy");
                debug!(root = %self.layout.root().display(), "unpacked copy already present");
                ResolutionState::Vendored { extracted: false }
            }
            BootstrapPlan::Extract => {
                info!("git not found, installing using local copy");
                self.extract()
            }
        }
    }

    fn extract(&self) -> ResolutionState {
        info!("extracting git tarball");
        if let Err(e) = self.unpacker.unpack(&self.archive, self.layout.root()) {
            warn!(archive = %self.archive.display(), error = %e, "extraction failed");
            return ResolutionState::Failed(e);
        }

        let binary = self.layout.binary();
        if !binary.is_file() {
            return ResolutionState::Failed(BootstrapError::BinaryMissing {
                path: binary.display().to_string(),
            });
        }
        ResolutionState::Vendored { extracted: true }
    }
}

/// Resolves `git` for `config` and builds the toolchain.
///
/// # Errors
///
/// Returns a `BootstrapError` if no host `git` exists and the vendored
/// archive cannot provide one.
pub fn bootstrap(config: &Config) -> Result<Toolchain, BootstrapError> {
    let layout = VendorLayout::new(config.vendor.root());
    let resolver = Resolver::new(
        layout,
        config.vendor.archive_path(),
        TarExtractor::new(&config.tools.tar),
    );
    resolver.resolve().into_toolchain(resolver.layout())
}
