// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Subscriber setup for the `envmap` binary.
//!
//! ```text
//! -l N / --file-log-level N  -->  LogLevel  -->  EnvFilter directive
//!
//!   Silent  off                    Debug  warn,envmap=debug   manifest loads
//!   Error   error                  Trace  warn,envmap=trace   every lookup
//!   Warn    warn   (default)       Dump   trace               dependencies too
//!   Info    warn,envmap=info
//!
//! init_logging: registry + stderr layer + optional non-blocking file layer
//! ```
//!
//! The library only emits events. Nothing here runs unless the binary
//! installs a subscriber.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use bon::Builder;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

/// Verbosity selected on the command line, 0 to 6.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Silent,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
    Dump,
}

impl LogLevel {
    /// Maps the numeric CLI level, `None` above 6.
    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        Some(match level {
            0 => Self::Silent,
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            4 => Self::Debug,
            5 => Self::Trace,
            6 => Self::Dump,
            _ => return None,
        })
    }

    /// `EnvFilter` directive. Below `Dump`, dependencies stay at `warn`.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Silent => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "warn,envmap=info",
            Self::Debug => "warn,envmap=debug",
            Self::Trace => "warn,envmap=trace",
            Self::Dump => "trace",
        }
    }
}

#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::Trace)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file))]
    log_file: Option<PathBuf>,
}

/// Keeps the file writer alive; pending lines are flushed on drop.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Installs the global subscriber.
///
/// Console output goes to stderr so `names`, `template` and `get` output
/// stays pipeable.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a global
/// subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(EnvFilter::new(config.console_level.directive()));

    let (file_layer, file_guard) = match &config.log_file {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create log directory {}", parent.display())
                })?;
            }
            let file = fs::File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);

            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new(config.file_level.directive()));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("a global logger is already installed")?;

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}
