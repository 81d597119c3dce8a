// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Compiled model types.
//!
//! # Two Surfaces
//!
//! ```text
//! env_mapper! { pub struct Db { port: Integer = "DB_PORT" } }
//!
//!   type-level (no environment access)     instance-level (lookup + parse)
//!   ----------------------------------     -------------------------------
//!   Db::variable_name("port") -> "DB_PORT" Db::new().port()   -> Integer
//!   Db::bindings()            -> [Binding] Db::new().raw("port") -> String
//!   Db::variable_name("nope") -> NoSuchAttributeError
//! ```
//!
//! A typo in a typed accessor (`db.prot()`) is a compile error. The
//! string-keyed surfaces report [`NoSuchAttributeError`] instead, never
//! `NoSuchVariableError`.

mod macros;


use std::convert::Infallible;

use crate::binding::{self, Binding};
use crate::core::accessor;
use crate::core::env::Source;
use crate::error::{LookupError, NoSuchAttributeError};

/// A model type declared with [`env_mapper!`](crate::env_mapper).
///
/// Associated functions read the declaration only. Methods taking `&self`
/// read the environment of that instance at call time.
pub trait EnvMapper {
    /// Name of the model type.
    const NAME: &'static str;

    /// Every declared binding, in declaration order.
    const BINDINGS: &'static [Binding<'static>];

    /// The environment this instance reads.
    fn source(&self) -> &Source;

    #[must_use]
    fn bindings() -> &'static [Binding<'static>] {
        Self::BINDINGS
    }

    /// Returns the binding declared for `attribute`.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchAttributeError`] if `attribute` is not declared.
    fn binding(attribute: &str) -> Result<&'static Binding<'static>, NoSuchAttributeError> {
        binding::find(Self::BINDINGS, attribute)
            .ok_or_else(|| NoSuchAttributeError::new(Self::NAME, attribute))
    }

    /// Type-level read: the variable name bound to `attribute`.
    ///
    /// Never touches the environment.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchAttributeError`] if `attribute` is not declared.
    fn variable_name(attribute: &str) -> Result<&'static str, NoSuchAttributeError> {
        Self::binding(attribute).map(|b| b.variable)
    }

    /// All variable names, in declaration order.
    #[must_use]
    fn variable_names() -> Vec<&'static str> {
        Self::BINDINGS.iter().map(|b| b.variable).collect()
    }

    /// Instance-level read of the unparsed value behind `attribute`.
    ///
    /// # Errors
    ///
    /// [`LookupError::NoSuchAttribute`] for an undeclared attribute, otherwise
    /// whatever [`accessor::lookup_raw`] reports.
    fn raw(&self, attribute: &str) -> Result<String, LookupError<Infallible>> {
        let binding = Self::binding(attribute)?;
        Ok(accessor::lookup_raw(self.source(), binding.variable)?)
    }
}
