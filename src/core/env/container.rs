// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable struct and copy-on-write implementation.
//!
//! ```text
//! Env { vars: Arc<BTreeMap<EnvKey, String>> }
//! clone shares the Arc until the first write (Arc::make_mut)
//! ```

use super::types::{EnvFlags, EnvKey, PATH_SEPARATOR, PATH_VAR};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// A set of environment variables with copy-on-write semantics.
///
/// `Env` is `Send` and `Sync`; clones are cheap until one of them is modified.
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: Arc<BTreeMap<EnvKey, String>>,
}

impl Env {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        vars.into_iter().collect()
    }

    /// Sets an environment variable, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.set_with_flags(key, value, EnvFlags::Replace)
    }

    /// Sets an environment variable with specific flags.
    pub fn set_with_flags(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        flags: EnvFlags,
    ) -> &mut Self {
        let key = EnvKey::new(key.into());
        let value = value.into();
        let vars = Arc::make_mut(&mut self.vars);

        match (flags, vars.get_mut(&key)) {
            (EnvFlags::Append, Some(existing)) => existing.push_str(&value),
            (EnvFlags::Prepend, Some(existing)) => existing.insert_str(0, &value),
            _ => {
                vars.insert(key, value);
            }
        }

        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(&EnvKey::new(key)).map(String::as_str)
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        if self.vars.contains_key(&EnvKey::new(key)) {
            Arc::make_mut(&mut self.vars).remove(&EnvKey::new(key));
        }
        self
    }

    /// Prepends a directory to `PATH` unless it is already listed.
    pub fn prepend_path(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.modify_path(path.as_ref(), EnvFlags::Prepend)
    }

    /// Appends a directory to `PATH` unless it is already listed.
    pub fn append_path(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.modify_path(path.as_ref(), EnvFlags::Append)
    }

    /// Returns true if `dir` is one of the `PATH` entries.
    #[must_use]
    pub fn path_contains(&self, dir: impl AsRef<Path>) -> bool {
        let dir = dir.as_ref();
        self.get(PATH_VAR)
            .is_some_and(|current| current.split(PATH_SEPARATOR).any(|e| Path::new(e) == dir))
    }

    fn modify_path(&mut self, path: &Path, flags: EnvFlags) -> &mut Self {
        if self.path_contains(path) {
            return self;
        }

        let entry = path.to_string_lossy().into_owned();
        match (flags, self.get(PATH_VAR)) {
            (EnvFlags::Prepend, Some(current)) if !current.is_empty() => {
                let new_path = format!("{entry}{PATH_SEPARATOR}{current}");
                self.set(PATH_VAR, new_path)
            }
            (EnvFlags::Append, Some(current)) if !current.is_empty() => {
                let new_path = format!("{current}{PATH_SEPARATOR}{entry}");
                self.set(PATH_VAR, new_path)
            }
            _ => self.set(PATH_VAR, entry),
        }
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    /// Returns an iterator over environment variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Env {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: Arc::new(
                iter.into_iter()
                    .map(|(k, v)| (EnvKey::new(k), v.into()))
                    .collect(),
            ),
        }
    }
}
