// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Instance-level attribute resolution.
//!
//! ```text
//! resolve::<T>(env, variable)
//!        |
//!        v
//!   lookup_raw ---- unset ------> NoSuchVariable(variable)
//!        |    \---- not utf-8 --> NotUnicode { variable }
//!        v
//!   raw: String (may be "")
//!        |
//!        v
//!   T::from_str ---- Err(e) ----> Parse(e), unmodified
//!        |
//!        v
//!       Ok(T)
//! ```
//!
//! Nothing here caches: every call is one lookup against `env` and one
//! parse. Type-level reads never reach this module.

use std::convert::Infallible;
use std::env::VarError;
use std::str::FromStr;

use tracing::trace;

use crate::core::env::ReadEnv;
use crate::error::{NoSuchVariableError, ResolveError};

/// Looks up `variable` and returns its raw value.
///
/// The empty string is a present value.
///
/// # Errors
///
/// [`ResolveError::NoSuchVariable`] if the variable is unset,
/// [`ResolveError::NotUnicode`] if its value is not valid UTF-8.
pub fn lookup_raw<E>(env: &E, variable: &str) -> Result<String, ResolveError<Infallible>>
where
    E: ReadEnv + ?Sized,
{
    match env.var(variable) {
        Ok(raw) => Ok(raw),
        Err(VarError::NotPresent) => {
            trace!(variable, "environment variable not set");
            Err(NoSuchVariableError::new(variable).into())
        }
        Err(VarError::NotUnicode(_)) => Err(ResolveError::NotUnicode {
            variable: variable.to_owned(),
        }),
    }
}

/// Looks up `variable` and converts it with `T`'s `FromStr`.
///
/// # Errors
///
/// Everything [`lookup_raw`] reports, plus [`ResolveError::Parse`] carrying
/// `T`'s own error when the value does not parse.
pub fn resolve<T, E>(env: &E, variable: &str) -> Result<T, ResolveError<T::Err>>
where
    T: FromStr,
    E: ReadEnv + ?Sized,
{
    let raw = lookup_raw(env, variable).map_err(|e| e.widen::<T::Err>())?;
    trace!(variable, ty = std::any::type_name::<T>(), "resolving");
    raw.parse::<T>().map_err(ResolveError::Parse)
}

/// Like [`resolve`], converting with an explicit parser instead of `FromStr`.
///
/// # Errors
///
/// As [`resolve`], with `parse`'s error in [`ResolveError::Parse`].
pub fn resolve_with<T, P, F, E>(env: &E, variable: &str, parse: F) -> Result<T, ResolveError<P>>
where
    F: FnOnce(&str) -> Result<T, P>,
    E: ReadEnv + ?Sized,
{
    let raw = lookup_raw(env, variable).map_err(|e| e.widen::<P>())?;
    trace!(variable, "resolving");
    parse(&raw).map_err(ResolveError::Parse)
}
