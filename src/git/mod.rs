// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git provisioning and execution.
//!
//! ```text
//!      exec.rs  (exec_command, GitExecutor)
//!          |
//!          v
//!   toolchain.rs  (once-cell, env overlay)
//!          |
//!          v
//!   bootstrap.rs  (plan + ResolutionState)
//!       /      \
//!      v        v
//!  which_in   extract.rs --> tar -xf
//!              layout.rs     <root>/usr/...
//! ```
//!
//! **Host first**: a `git` on `PATH` is used as is, with an empty overlay.
//! **Vendored**: otherwise the bundled archive is unpacked once into the
//! vendor root and its directories are exported to every child.

pub mod bootstrap;
pub mod exec;
pub mod extract;
pub mod layout;
pub mod toolchain;

pub use exec::{CommandOutput, ExecOptions, GitExecutor, exec_command};
pub use toolchain::Toolchain;
