// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Manifest --> Command Dispatch
//!   Version | Names | Template | Get | Check
//! ```

use std::process::ExitCode;

use envmap::cli::global::GlobalOptions;
use envmap::cli::{self, Command};
use envmap::cmd::check::{run_check_command, run_get_command};
use envmap::cmd::names::run_names_command;
use envmap::cmd::template::run_template_command;
use envmap::logging::init_logging;
use envmap::logging::{LogConfig, LogLevel};
use envmap::manifest::ManifestModel;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or_default();

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.clone())
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Command::Names(args)) => {
            load_model(&cli.global).and_then(|model| run_names_command(args, &model))
        }
        Some(Command::Template) => load_model(&cli.global).map(|model| run_template_command(&model)),
        Some(Command::Get(args)) => {
            load_model(&cli.global).and_then(|model| run_get_command(args, &model))
        }
        Some(Command::Check) => load_model(&cli.global).and_then(|model| run_check_command(&model)),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_model(global: &GlobalOptions) -> envmap::error::Result<ManifestModel> {
    let loader = global.manifest_loader();
    for line in loader.format_loaded_files() {
        tracing::debug!("manifest {line}");
    }
    Ok(loader.build()?)
}
