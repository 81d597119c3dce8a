// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `names` command implementation.

use crate::cli::NamesArgs;
use crate::error::Result;
use crate::manifest::ManifestModel;

/// Formats one aligned line per binding: attribute, target, variable.
#[must_use]
pub fn format_names(model: &ManifestModel) -> Vec<String> {
    let bindings = model.bindings();
    let attr_width = bindings.iter().map(|b| b.attribute.len()).max().unwrap_or(0);
    let target_width = bindings.iter().map(|b| b.target.len()).max().unwrap_or(0);

    bindings
        .iter()
        .map(|b| {
            format!(
                "{:attr_width$}  {:target_width$}  {}",
                b.attribute, b.target, b.variable
            )
        })
        .collect()
}

/// Main handler for the `names` command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run_names_command(args: &NamesArgs, model: &ManifestModel) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&model.bindings())?);
        return Ok(());
    }

    if model.is_empty() {
        println!("No bindings declared");
    } else {
        for line in format_names(model) {
            println!("{line}");
        }
    }
    Ok(())
}
