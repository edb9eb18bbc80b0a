// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |         exec / bootstrap / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            |
//!                            v
//!                           git
//!          exec --> toolchain --> bootstrap --> extract
//!
//!   +-----------------------------------------+
//!   |  core   process, env                    |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! Library callers usually need only [`git::exec_command`]:
//!
//! ```rust,no_run
//! use git_vendor::git::{ExecOptions, exec_command};
//!
//! let output = exec_command(&["rev-parse", "HEAD"], &ExecOptions::default())?;
//! println!("{}", output.stdout_text().trim());
//! # Ok::<(), git_vendor::error::VendorError>(())
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
