// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `env_mapper!` declaration macro.

/// Declares a model type whose attributes are bound to environment variables.
///
/// Each attribute is written `name: TargetType = "VARIABLE_NAME"`. The target
/// type may be any `FromStr` type. The generated type gets:
///
/// - `new()` reading the live process environment, `with_env(..)` reading
///   any [`Source`](crate::core::env::Source)
/// - one accessor method per attribute returning
///   `Result<TargetType, ResolveError<<TargetType as FromStr>::Err>>`
/// - an [`EnvMapper`](crate::EnvMapper) implementation carrying the binding
///   table
///
/// Nothing is looked up when the type is declared or constructed. `new` and
/// `with_env` cannot be attribute names. An attribute named `source` or `raw`
/// is allowed; its accessor shadows the [`EnvMapper`](crate::EnvMapper)
/// method in method-call syntax, which stays reachable as
/// `EnvMapper::raw(&model, ..)`.
///
/// ```
/// use envmap::{EnvMapper, Integer, env_mapper};
///
/// env_mapper! {
///     pub struct Limits {
///         /// Maximum open connections.
///         connections: Integer = "LIMITS_CONNECTIONS",
///         ratio: f64 = "LIMITS_RATIO",
///     }
/// }
///
/// assert_eq!(Limits::variable_names(), ["LIMITS_CONNECTIONS", "LIMITS_RATIO"]);
/// ```
#[macro_export]
macro_rules! env_mapper {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $target:ty = $variable:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        $vis struct $name {
            env: $crate::core::env::Source,
        }

        #[allow(clippy::missing_errors_doc, dead_code)]
        impl $name {
            /// Creates an instance reading the live process environment.
            #[must_use]
            pub const fn new() -> Self {
                Self {
                    env: $crate::core::env::Source::System,
                }
            }

            /// Creates an instance reading `env`.
            #[must_use]
            pub fn with_env(env: impl ::core::convert::Into<$crate::core::env::Source>) -> Self {
                Self { env: env.into() }
            }

            $(
                $(#[$field_meta])*
                pub fn $field(
                    &self,
                ) -> ::core::result::Result<
                    $target,
                    $crate::error::ResolveError<<$target as ::core::str::FromStr>::Err>,
                > {
                    $crate::core::accessor::resolve::<$target, _>(&self.env, $variable)
                }
            )*
        }

        impl $crate::EnvMapper for $name {
            const NAME: &'static str = ::core::stringify!($name);

            const BINDINGS: &'static [$crate::Binding<'static>] = &[
                $(
                    $crate::Binding::new(
                        ::core::stringify!($field),
                        ::core::stringify!($target),
                        $variable,
                    ),
                )*
            ];

            fn source(&self) -> &$crate::core::env::Source {
                &self.env
            }
        }
    };
}
