// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Declared attribute bindings.
//!
//! ```text
//! Binding { attribute: "port", target: "Integer", variable: "SERVICE_PORT" }
//!              |                  |                  |
//!        model attribute    target type name   env var looked up
//! ```
//!
//! Bindings are created when a model is declared and never change. Compiled
//! models hold a `&'static [Binding<'static>]`; manifest models hand out
//! bindings borrowed from their owned table.

use serde::Serialize;

/// One declared attribute of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Binding<'a> {
    /// Attribute name, unique within its model.
    pub attribute: &'a str,
    /// Name of the target type, as declared.
    pub target: &'a str,
    /// Literal environment variable name.
    pub variable: &'a str,
}

impl<'a> Binding<'a> {
    #[must_use]
    pub const fn new(attribute: &'a str, target: &'a str, variable: &'a str) -> Self {
        Self {
            attribute,
            target,
            variable,
        }
    }
}

/// Finds the binding declared for `attribute`.
#[must_use]
pub fn find<'s, 'a>(bindings: &'s [Binding<'a>], attribute: &str) -> Option<&'s Binding<'a>> {
    bindings.iter().find(|b| b.attribute == attribute)
}

/// Returns the first attribute declared more than once, if any.
#[must_use]
pub fn first_duplicate<'a>(bindings: &[Binding<'a>]) -> Option<&'a str> {
    bindings
        .iter()
        .enumerate()
        .find(|(i, b)| bindings[..*i].iter().any(|prev| prev.attribute == b.attribute))
        .map(|(_, b)| b.attribute)
}

#[cfg(test)]
mod tests;
