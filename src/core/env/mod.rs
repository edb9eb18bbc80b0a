// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write BTreeMap<EnvKey, String>)
//! Sources: current_env(), Env::from_map(), Env::new()
//! Ops: set/get/remove/prepend_path/append_path
//! ```
//!
//! - **Case-insensitive on Windows** only
//! - **Copy-on-write**: Clones share data until modified
//! - **Search-path edits skip entries already present**

pub mod container;
pub mod types;


/// Captures the current process environment.
///
/// Variables whose name or value is not valid UTF-8 are skipped.
#[must_use]
pub fn current_env() -> container::Env {
    let vars = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect();
    container::Env::from_map(vars)
}
