// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scalar target types for runtime-declared bindings.
//!
//! ```text
//! ScalarKind    parser                  Value
//! ----------    ------                  -----
//! str           identity                Str(String)
//! int           Integer::from_str       Int(Integer)   arbitrary precision
//! float         f64::from_str           Float(f64)
//! bool          bool::from_str          Bool(bool)
//! ```
//!
//! Compiled models (`env_mapper!`) take any `FromStr` type directly, with
//! [`Integer`] as the canonical integer. The rest of this module serves
//! models whose types are only known at run time.

use std::fmt;
use std::num::ParseFloatError;
use std::str::ParseBoolError;

use num_bigint::ParseBigIntError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod integer;

pub use integer::Integer;

/// The target type of a runtime-declared binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    #[serde(alias = "string")]
    Str,
    #[serde(alias = "integer")]
    Int,
    Float,
    #[serde(alias = "boolean")]
    Bool,
}

impl ScalarKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
        }
    }

    /// Converts `raw` with this kind's parser.
    ///
    /// # Errors
    ///
    /// Returns the native parse error of the target type.
    pub fn parse(self, raw: &str) -> Result<Value, ParseError> {
        Ok(match self {
            Self::Str => Value::Str(raw.to_owned()),
            Self::Int => Value::Int(raw.parse()?),
            Self::Float => Value::Float(raw.parse()?),
            Self::Bool => Value::Bool(raw.parse()?),
        })
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(Integer),
    Float(f64),
    Bool(bool),
}

impl Value {
    #[must_use]
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::Str(_) => ScalarKind::Str,
            Self::Int(_) => ScalarKind::Int,
            Self::Float(_) => ScalarKind::Float,
            Self::Bool(_) => ScalarKind::Bool,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<&Integer> {
        match self {
            Self::Int(i) => Some(i),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Native parse error of a scalar target type, passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Int(#[from] ParseBigIntError),

    #[error(transparent)]
    Float(#[from] ParseFloatError),

    #[error(transparent)]
    Bool(#[from] ParseBoolError),
}
