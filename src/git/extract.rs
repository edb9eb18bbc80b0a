// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Archive extraction for the bundled distribution.
//!
//! ```text
//! git-<version>.tar --> tar -xf <archive> -C <root> --> <root>/usr/...
//! ```

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::process::builder::ProcessBuilder;
use crate::error::BootstrapError;

/// Unpacks an archive into a destination directory.
pub trait Unpack {
    /// Extracts the full contents of `archive` into `dest`.
    ///
    /// # Errors
    ///
    /// Returns a `BootstrapError` if the archive is missing or extraction fails.
    fn unpack(&self, archive: &Path, dest: &Path) -> Result<(), BootstrapError>;
}

/// Extracts tarballs with an external `tar` executable.
#[derive(Debug, Clone)]
pub struct TarExtractor {
    tar: PathBuf,
}

impl TarExtractor {
    pub fn new(tar: impl Into<PathBuf>) -> Self {
        Self { tar: tar.into() }
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.tar
    }
}

impl Default for TarExtractor {
    fn default() -> Self {
        Self::new("tar")
    }
}

impl Unpack for TarExtractor {
    fn unpack(&self, archive: &Path, dest: &Path) -> Result<(), BootstrapError> {
        let failed = |message: String| BootstrapError::ExtractFailed {
            archive: archive.display().to_string(),
            root: dest.display().to_string(),
            message,
        };

        if !archive.is_file() {
            return Err(BootstrapError::ArchiveMissing {
                path: archive.display().to_string(),
            });
        }

        std::fs::create_dir_all(dest)
            .map_err(|e| failed(format!("failed to create destination: {e}")))?;

        debug!(
            archive = %archive.display(),
            output = %dest.display(),
            tar = %self.tar.display(),
            "Extracting archive"
        );

        ProcessBuilder::new(&self.tar)
            .name("tar")
            .arg("-xf")
            .arg(archive)
            .arg("-C")
            .arg(dest)
            .run()
            .map_err(|e| failed(e.to_string()))?;

        info!(
            archive = %archive.display(),
            output = %dest.display(),
            "Archive extracted successfully"
        );
        Ok(())
    }
}
