// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable sources.
//!
//! # Architecture
//!
//! ```text
//! ReadEnv (trait: var(key) -> Result<String, VarError>)
//!   |
//!   +-- SystemEnv  live process environment, read on every call
//!   +-- Env        owned map (copy-on-write BTreeMap<EnvKey, String>)
//!   +-- Source     System | Map(Env), held by model instances
//! ```
//!
//! - **Live by default**: `Source::System` never snapshots the process table
//! - **Case-insensitive keys on Windows** for `Env`, matching the host
//! - **Copy-on-write**: `Env` clones share data until modified

pub mod container;
pub mod source;
pub mod types;


pub use container::Env;
pub use source::{ReadEnv, Source, SystemEnv};

/// Captures the current process environment into an owned [`Env`].
///
/// Variables whose name or value is not valid UTF-8 are skipped.
#[must_use]
pub fn current_env() -> Env {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
