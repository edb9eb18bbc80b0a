// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Child process spawning.
//!
//! ```text
//! ProcessBuilder::new(program)
//!   .args() .cwd() .env() .stdin()
//!   .output()        --> std::process::Command   (blocking)
//!   .output_async()  --> tokio::process::Command (async)
//!   .run()           --> output() + non-zero exit is an error
//!       --> ProcessOutput { exit_code, stdout, stderr }
//! ```
//!
//! stdin is piped only when content is set; otherwise it is inherited.
//! stdout and stderr are always captured.

pub mod builder;
mod runner;
