// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directory layout of an unpacked git distribution.
//!
//! ```text
//! <root>/
//!   usr/bin/git                     binary
//!   usr/share/git-core/templates/   GIT_TEMPLATE_DIR
//!   usr/libexec/git-core/           GIT_EXEC_PATH
//!   usr/lib64/                      LD_LIBRARY_PATH
//! ```

use std::path::{Path, PathBuf};

/// Executable name looked up on the search path.
pub const GIT_PROGRAM: &str = "git";

pub const TEMPLATE_DIR_VAR: &str = "GIT_TEMPLATE_DIR";
pub const EXEC_PATH_VAR: &str = "GIT_EXEC_PATH";
pub const LIBRARY_PATH_VAR: &str = "LD_LIBRARY_PATH";

/// Paths inside an unpacked distribution rooted at `root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorLayout {
    root: PathBuf,
}

impl VendorLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn bin_dir(&self) -> PathBuf {
        self.root.join("usr/bin")
    }

    #[must_use]
    pub fn binary(&self) -> PathBuf {
        self.bin_dir().join(GIT_PROGRAM)
    }

    #[must_use]
    pub fn template_dir(&self) -> PathBuf {
        self.root.join("usr/share/git-core/templates")
    }

    #[must_use]
    pub fn exec_path(&self) -> PathBuf {
        self.root.join("usr/libexec/git-core")
    }

    #[must_use]
    pub fn library_dir(&self) -> PathBuf {
        self.root.join("usr/lib64")
    }

    /// True if the binary has already been unpacked.
    #[must_use]
    pub fn is_unpacked(&self) -> bool {
        self.binary().is_file()
    }
}
