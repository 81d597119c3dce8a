// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!   string-keyed read                instance read
//!          |                               |
//!          v                               v
//!  NoSuchAttributeError            ResolveError<E>
//!   (not a Binding)          +-----------+-----------+
//!                            |           |           |
//!                            v           v           v
//!                     NoSuchVariable  NotUnicode   Parse(E)
//!                      (unset)                   (native error,
//!                                                 transparent)
//!
//!  LookupError<E> = NoSuchAttribute | Resolve(ResolveError<E>)
//!  ManifestError  = DuplicateAttribute | Load(config::ConfigError)
//! ```
//!
//! A missing variable gets a dedicated kind. A malformed value does not:
//! the target type's own `FromStr::Err` is carried as-is so its message and
//! source chain are what the caller sees.

use std::convert::Infallible;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// A declared Binding whose environment variable is not set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("environment variable '{variable}' is not set")]
pub struct NoSuchVariableError {
    variable: Box<str>,
}

impl NoSuchVariableError {
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into().into_boxed_str(),
        }
    }

    /// The literal name of the unset variable.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }
}

/// A read of an attribute that is not part of the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{model}' has no attribute '{attribute}'")]
pub struct NoSuchAttributeError {
    model: Box<str>,
    attribute: Box<str>,
}

impl NoSuchAttributeError {
    pub fn new(model: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            model: model.into().into_boxed_str(),
            attribute: attribute.into().into_boxed_str(),
        }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }
}

/// Failure of one instance-level read.
///
/// `E` is the target type's `FromStr::Err`.
#[derive(Debug, Error)]
pub enum ResolveError<E> {
    /// The backing variable is not set.
    #[error(transparent)]
    NoSuchVariable(#[from] NoSuchVariableError),

    /// The backing variable is set but does not hold valid UTF-8.
    #[error("environment variable '{variable}' is not valid unicode")]
    NotUnicode { variable: String },

    /// The target type rejected the value.
    #[error(transparent)]
    Parse(E),
}

impl<E> ResolveError<E> {
    /// Returns true if the backing variable is unset.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::NoSuchVariable(_))
    }

    /// Returns the parse error, if the value was rejected by the target type.
    #[must_use]
    pub const fn parse_error(&self) -> Option<&E> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }

    /// Converts the parse error type, keeping the other variants.
    pub fn map_parse<F>(self, f: impl FnOnce(E) -> F) -> ResolveError<F> {
        match self {
            Self::NoSuchVariable(e) => ResolveError::NoSuchVariable(e),
            Self::NotUnicode { variable } => ResolveError::NotUnicode { variable },
            Self::Parse(e) => ResolveError::Parse(f(e)),
        }
    }
}

impl ResolveError<Infallible> {
    /// Widens a raw-lookup error into any parse error type.
    #[must_use]
    pub fn widen<E>(self) -> ResolveError<E> {
        self.map_parse(|never| match never {})
    }
}

/// Failure of a string-keyed instance read.
#[derive(Debug, Error)]
pub enum LookupError<E = crate::scalar::ParseError> {
    #[error(transparent)]
    NoSuchAttribute(#[from] NoSuchAttributeError),

    #[error(transparent)]
    Resolve(#[from] ResolveError<E>),
}

impl<E> LookupError<E> {
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Resolve(e) if e.is_missing())
    }
}

/// Manifest loading errors.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Two bindings declare the same attribute.
    #[error("attribute '{attribute}' is declared more than once")]
    DuplicateAttribute { attribute: String },

    /// The manifest could not be read or deserialized.
    #[error("failed to load manifest: {0}")]
    Load(#[from] config::ConfigError),
}
