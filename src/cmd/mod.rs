// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   bootstrap, config, exec
//! ```

pub mod bootstrap;
pub mod config;
pub mod exec;

#[cfg(test)]
mod tests;
