// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Models declared at run time from TOML manifests.
//!
//! # Manifest Format
//!
//! ```toml
//! name = "service"
//!
//! [[binding]]
//! attribute = "port"
//! type = "int"          # str | int | float | bool
//! variable = "SERVICE_PORT"
//! ```
//!
//! A [`ManifestModel`] offers the same two surfaces as a compiled model:
//! `variable_name`/`bindings` read the declaration, `resolve`/`raw` read the
//! environment on every call.

pub mod loader;


use std::convert::Infallible;

use serde::Deserialize;

use crate::binding::{self, Binding};
use crate::core::accessor;
use crate::core::env::Source;
use crate::error::{LookupError, ManifestError, NoSuchAttributeError};
use crate::scalar::{ParseError, ScalarKind, Value};

pub use loader::ManifestLoader;

/// One `[[binding]]` entry of a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestBinding {
    pub attribute: String,
    #[serde(rename = "type")]
    pub kind: ScalarKind,
    pub variable: String,
}

impl ManifestBinding {
    pub fn new(attribute: impl Into<String>, kind: ScalarKind, variable: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            kind,
            variable: variable.into(),
        }
    }

    #[must_use]
    pub fn as_binding(&self) -> Binding<'_> {
        Binding::new(&self.attribute, self.kind.as_str(), &self.variable)
    }
}

/// Raw shape of one manifest source.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ManifestFile {
    name: Option<String>,
    #[serde(rename = "binding")]
    bindings: Vec<ManifestBinding>,
}

/// A model whose bindings were declared at run time.
#[derive(Debug, Clone)]
pub struct ManifestModel {
    name: String,
    bindings: Vec<ManifestBinding>,
    env: Source,
}

impl ManifestModel {
    /// Creates a model reading the live process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::DuplicateAttribute`] if an attribute is
    /// declared twice.
    pub fn new(
        name: impl Into<String>,
        bindings: Vec<ManifestBinding>,
    ) -> Result<Self, ManifestError> {
        let model = Self {
            name: name.into(),
            bindings,
            env: Source::System,
        };
        if let Some(attribute) = binding::first_duplicate(&model.bindings()) {
            return Err(ManifestError::DuplicateAttribute {
                attribute: attribute.to_string(),
            });
        }
        Ok(model)
    }

    /// Returns this model reading `env` instead.
    #[must_use]
    pub fn with_env(mut self, env: impl Into<Source>) -> Self {
        self.env = env.into();
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Every declared binding, in declaration order.
    #[must_use]
    pub fn bindings(&self) -> Vec<Binding<'_>> {
        self.bindings.iter().map(ManifestBinding::as_binding).collect()
    }

    fn entry(&self, attribute: &str) -> Result<&ManifestBinding, NoSuchAttributeError> {
        self.bindings
            .iter()
            .find(|b| b.attribute == attribute)
            .ok_or_else(|| NoSuchAttributeError::new(&self.name, attribute))
    }

    /// Type-level read: the variable name bound to `attribute`.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchAttributeError`] if `attribute` is not declared.
    pub fn variable_name(&self, attribute: &str) -> Result<&str, NoSuchAttributeError> {
        self.entry(attribute).map(|b| b.variable.as_str())
    }

    /// Instance-level read: looks up and converts `attribute`.
    ///
    /// # Errors
    ///
    /// [`LookupError::NoSuchAttribute`] for an undeclared attribute, otherwise
    /// a [`LookupError::Resolve`] for an unset, non-UTF-8 or unparsable value.
    pub fn resolve(&self, attribute: &str) -> Result<Value, LookupError<ParseError>> {
        let entry = self.entry(attribute)?;
        let kind = entry.kind;
        Ok(accessor::resolve_with(&self.env, &entry.variable, |raw| {
            kind.parse(raw)
        })?)
    }

    /// Instance-level read of the unparsed value behind `attribute`.
    ///
    /// # Errors
    ///
    /// As [`resolve`](Self::resolve), minus parse failures.
    pub fn raw(&self, attribute: &str) -> Result<String, LookupError<Infallible>> {
        let entry = self.entry(attribute)?;
        Ok(accessor::lookup_raw(&self.env, &entry.variable)?)
    }
}
