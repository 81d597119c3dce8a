// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envmap using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envmap [-m FILE]... [global options] <command>
//! version
//! names [--json]        type-level, no lookup
//! template              .env.example
//! get <attribute>       instance-level, one attribute
//! check                 instance-level, every attribute
//! ```

pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand};

/// Typed environment variable bindings.
///
/// Inspects and resolves models declared in TOML manifests.
#[derive(Debug, Parser)]
#[command(
    name = "envmap",
    author,
    version,
    about = "Typed environment variable bindings",
    after_help = "MANIFESTS:\n\n\
                  Without --manifest, envmap reads `envmap.toml` from the\n\
                  current directory if it exists. Each --manifest, given\n\
                  before the command, adds its bindings after the previous\n\
                  ones; declaring the same attribute twice is an error.\n\
                  ENVMAP_MANIFEST may hold a comma-separated list of\n\
                  manifests instead."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists every attribute with its target type and variable name.
    Names(NamesArgs),

    /// Prints a `.env.example` template for the model.
    Template,

    /// Resolves one attribute against the current environment.
    Get(GetArgs),

    /// Resolves every attribute and reports the ones that fail.
    Check,
}

/// Arguments for `names`.
#[derive(Debug, Clone, Default, Args)]
pub struct NamesArgs {
    /// Prints the bindings as a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `get`.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Attribute to resolve.
    pub attribute: String,

    /// Prints the raw value without converting it.
    #[arg(long)]
    pub raw: bool,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
