// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! ```text
//! --manifest FILE   ← Manifest files, layered in order (can repeat,
//!                     before the command only)
//! --log-level N     ← Console verbosity (0-6)
//! --log-file FILE   ← Also log to FILE at --file-log-level
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::manifest::ManifestLoader;

/// Manifest read when no `--manifest` is given.
pub const DEFAULT_MANIFEST: &str = "envmap.toml";

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to a TOML manifest declaring the model.
    /// Can be specified multiple times, before the command.
    // Not global: clap replaces a global list with the subcommand's
    // occurrences instead of appending them.
    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "FILE",
        env = "ENVMAP_MANIFEST",
        value_delimiter = ',',
        action = clap::ArgAction::Append
    )]
    pub manifests: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true)]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true)]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Builds the manifest loader for these options.
    ///
    /// Explicit manifests are required; the default one is optional.
    #[must_use]
    pub fn manifest_loader(&self) -> ManifestLoader {
        if self.manifests.is_empty() {
            return ManifestLoader::new().add_toml_file_optional(DEFAULT_MANIFEST);
        }
        self.manifests
            .iter()
            .fold(ManifestLoader::new(), ManifestLoader::add_toml_file)
    }
}
