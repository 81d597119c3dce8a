// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Owned environment variable set with copy-on-write semantics.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write)
//! vars: Arc<BTreeMap<EnvKey, String>>
//! clone shares the Arc until set()/remove() calls Arc::make_mut
//! ```

use std::collections::BTreeMap;
use std::env::VarError;
use std::sync::Arc;

use super::source::ReadEnv;
use super::types::EnvKey;

/// A set of environment variables with copy-on-write semantics.
///
/// Used to resolve a model against a prepared environment instead of the
/// live process table.
///
/// # Thread Safety
/// `Env` is `Send` and `Sync` due to its use of `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: Arc<BTreeMap<EnvKey, String>>,
}

impl Env {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        vars.into_iter().collect()
    }

    /// Sets an environment variable, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        Arc::make_mut(&mut self.vars).insert(EnvKey::new(key), value.into());
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(&EnvKey::new(key)).map(String::as_str)
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        if self.get(key).is_some() {
            Arc::make_mut(&mut self.vars).remove(&EnvKey::new(key));
        }
        self
    }

    /// Returns an iterator over environment variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (EnvKey::new(k), v.into()))
            .collect();
        Self {
            vars: Arc::new(vars),
        }
    }
}

impl ReadEnv for Env {
    fn var(&self, key: &str) -> Result<String, VarError> {
        self.get(key).map(str::to_owned).ok_or(VarError::NotPresent)
    }
}
