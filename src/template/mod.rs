// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `.env.example` rendering from type-level reads.
//!
//! ```text
//! # service
//!
//! # host (str)
//! SERVICE_HOST=
//!
//! # port (int)
//! SERVICE_PORT=
//! ```
//!
//! A variable bound by several attributes is written once, under one comment
//! line per attribute. No variable is looked up.

use std::fmt::Write as _;

use crate::binding::Binding;
use crate::mapper::EnvMapper;

/// Renders a `.env.example` document for `model`.
#[must_use]
pub fn render_env_template<'a>(
    model: &str,
    bindings: impl IntoIterator<Item = Binding<'a>>,
) -> String {
    let mut groups: Vec<(&str, Vec<Binding<'a>>)> = Vec::new();
    for binding in bindings {
        match groups.iter_mut().find(|(v, _)| *v == binding.variable) {
            Some((_, group)) => group.push(binding),
            None => groups.push((binding.variable, vec![binding])),
        }
    }

    let mut out = format!("# {model}\n");
    for (variable, group) in groups {
        out.push('\n');
        for b in group {
            let _ = writeln!(out, "# {} ({})", b.attribute, b.target);
        }
        let _ = writeln!(out, "{variable}=");
    }
    out
}

/// Renders the template for a compiled model.
#[must_use]
pub fn for_model<M: EnvMapper>() -> String {
    render_env_template(M::NAME, M::bindings().iter().copied())
}
