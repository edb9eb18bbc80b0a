// git-vendor: vendored git bootstrap and command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Exec | Bootstrap | Options | Inis | Version
//! ```

use std::process::ExitCode;

use git_vendor::cli::global::GlobalOptions;
use git_vendor::cli::{self, Command};
use git_vendor::cmd::bootstrap::run_bootstrap_command;
use git_vendor::cmd::config::{run_inis_command, run_options_command};
use git_vendor::cmd::exec::run_exec_command;
use git_vendor::config::loader::ConfigLoader;
use git_vendor::config::Config;
use git_vendor::error::VendorError;
use git_vendor::logging::init_logging;
use git_vendor::logging::LogConfig;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config, cli.global.log_json);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config).await
}

fn build_log_config(config: &Config, json: bool) -> LogConfig {
    LogConfig::builder()
        .with_json(json)
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            run_inis_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::Bootstrap) => run_bootstrap_command(config),
        Some(Command::Exec(args)) => run_exec_command(args, config).await,
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_code_for(&e)
        }
    }
}

/// A failed git run exits with git's own status when it fits in a byte.
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .downcast_ref::<VendorError>()
        .and_then(VendorError::as_exec)
        .and_then(|failure| u8::try_from(failure.code).ok())
        .filter(|&code| code != 0)
        .map_or(ExitCode::FAILURE, ExitCode::from)
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

/// `--ini` files land between the local file and the environment.
fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    global
        .inis
        .iter()
        .fold(Config::ambient(), |loader, ini_path| loader.add_toml_file(ini_path))
}

fn load_config(global: &GlobalOptions) -> git_vendor::error::Result<Config> {
    let mut loader = build_config_loader(global);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    loader.build()
}
