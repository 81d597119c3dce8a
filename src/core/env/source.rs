// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read access to an environment table.

use std::env::{self, VarError};

use super::container::Env;

/// Read-only access to a table of environment variables.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site.
pub trait ReadEnv {
    /// Looks up `key`.
    ///
    /// # Errors
    ///
    /// Returns [`VarError::NotPresent`] if the variable is unset and
    /// [`VarError::NotUnicode`] if its value is not valid UTF-8.
    fn var(&self, key: &str) -> Result<String, VarError>;
}

impl<T: ReadEnv + ?Sized> ReadEnv for &T {
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}

/// Zero-sized type, delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        env::var(key)
    }
}

/// The environment a model instance reads from.
#[derive(Debug, Clone, Default)]
pub enum Source {
    /// The live process environment.
    #[default]
    System,
    /// An owned variable set.
    Map(Env),
}

impl ReadEnv for Source {
    fn var(&self, key: &str) -> Result<String, VarError> {
        match self {
            Self::System => SystemEnv.var(key),
            Self::Map(env) => env.var(key),
        }
    }
}

impl From<SystemEnv> for Source {
    fn from(_: SystemEnv) -> Self {
        Self::System
    }
}

impl From<Env> for Source {
    fn from(env: Env) -> Self {
        Self::Map(env)
    }
}
