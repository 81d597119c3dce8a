// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `get` and `check` command implementations.
//!
//! ```text
//! check: for each binding -> model.resolve(attribute)
//!          Ok(value)            -> ok       value
//!          NoSuchVariable       -> missing  VARIABLE
//!          NotUnicode / Parse   -> invalid  VARIABLE: native message
//! ```

use std::fmt;

use anyhow::anyhow;
use tracing::warn;

use crate::cli::GetArgs;
use crate::error::{LookupError, ResolveError, Result};
use crate::manifest::ManifestModel;
use crate::scalar::Value;

/// Outcome of resolving one attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckStatus {
    Ok(Value),
    Missing,
    Invalid(String),
}

/// One line of a `check` report.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckEntry {
    pub attribute: String,
    pub variable: String,
    pub status: CheckStatus,
}

impl fmt::Display for CheckEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            CheckStatus::Ok(value) => write!(f, "ok       {} = {value}", self.attribute),
            CheckStatus::Missing => {
                write!(f, "missing  {} ({} is not set)", self.attribute, self.variable)
            }
            CheckStatus::Invalid(message) => {
                write!(f, "invalid  {} ({}: {message})", self.attribute, self.variable)
            }
        }
    }
}

/// Result of resolving every attribute of a model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckReport {
    pub entries: Vec<CheckEntry>,
}

impl CheckReport {
    /// Resolves every binding of `model` against its environment.
    #[must_use]
    pub fn run(model: &ManifestModel) -> Self {
        let entries = model
            .bindings()
            .iter()
            .map(|b| {
                let status = match model.resolve(b.attribute) {
                    Ok(value) => CheckStatus::Ok(value),
                    Err(LookupError::Resolve(ResolveError::NoSuchVariable(_))) => {
                        CheckStatus::Missing
                    }
                    Err(e) => CheckStatus::Invalid(e.to_string()),
                };
                CheckEntry {
                    attribute: b.attribute.to_string(),
                    variable: b.variable.to_string(),
                    status,
                }
            })
            .collect();
        Self { entries }
    }

    /// Number of attributes that did not resolve.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| !matches!(e.status, CheckStatus::Ok(_)))
            .count()
    }

    #[must_use]
    pub fn format_lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

/// Main handler for the `check` command.
///
/// # Errors
///
/// Returns an error if any attribute fails to resolve.
pub fn run_check_command(model: &ManifestModel) -> Result<()> {
    let report = CheckReport::run(model);
    for line in report.format_lines() {
        println!("{line}");
    }

    match report.failures() {
        0 => Ok(()),
        n => {
            warn!(model = model.name(), failures = n, "check failed");
            Err(anyhow!(
                "{n} of {} attributes failed to resolve",
                report.entries.len()
            ))
        }
    }
}

/// Main handler for the `get` command.
///
/// # Errors
///
/// Returns the lookup error unchanged: undeclared attribute, unset variable,
/// or the target type's parse error.
pub fn run_get_command(args: &GetArgs, model: &ManifestModel) -> Result<()> {
    if args.raw {
        println!("{}", model.raw(&args.attribute)?);
    } else {
        println!("{}", model.resolve(&args.attribute)?);
    }
    Ok(())
}
