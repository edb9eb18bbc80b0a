// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! ```text
//! EnvFlags: Replace | Append | Prepend
//! EnvKey:   case-insensitive on Windows (PATH == Path), exact elsewhere
//! ```

use std::cmp::Ordering;

/// Name of the search-path variable.
pub const PATH_VAR: &str = "PATH";

/// Separator between search-path entries.
pub const PATH_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Flags for environment variable operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvFlags {
    /// Replace the existing value (default)
    #[default]
    Replace,
    /// Append to the existing value
    Append,
    /// Prepend to the existing value
    Prepend,
}

/// An environment variable key, compared the way the host OS compares them.
#[derive(Debug, Clone, Eq)]
pub(super) struct EnvKey(String);

impl EnvKey {
    pub(super) fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    fn cmp(&self, other: &Self) -> Ordering {
        if cfg!(windows) {
            self.0
                .bytes()
                .map(|b| b.to_ascii_lowercase())
                .cmp(other.0.bytes().map(|b| b.to_ascii_lowercase()))
        } else {
            self.0.cmp(&other.0)
        }
    }
}
