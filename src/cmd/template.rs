// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `template` command implementation.

use crate::manifest::ManifestModel;
use crate::template::render_env_template;

/// Prints the `.env.example` template for `model`.
pub fn run_template_command(model: &ManifestModel) {
    print!("{}", render_env_template(model.name(), model.bindings()));
}
