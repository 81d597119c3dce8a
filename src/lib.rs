// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |           names / template / get / check
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |         manifest          |
//!              |  TOML-declared models     |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              mapper      scalar   template
//!           env_mapper!   Value     .env.example
//!               |
//!               v
//!   +-----------------------------------------+
//!   |  core   accessor (lookup + coerce), env |
//!   +-----------------------------------------+
//!   |  foundation   binding, error, logging   |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use envmap::{EnvMapper, Integer, env_mapper};
//!
//! env_mapper! {
//!     /// Settings for the HTTP listener.
//!     pub struct Listener {
//!         host: String = "LISTENER_HOST",
//!         port: Integer = "LISTENER_PORT",
//!     }
//! }
//!
//! // Through the type: the variable name, no lookup.
//! assert_eq!(Listener::variable_name("port").unwrap(), "LISTENER_PORT");
//!
//! // Through an instance: looked up and parsed on every read.
//! let env: envmap::core::env::Env = [("LISTENER_PORT", "8080")].into_iter().collect();
//! let listener = Listener::with_env(env);
//! assert_eq!(listener.port().unwrap(), Integer::from(8080));
//! assert!(listener.host().unwrap_err().is_missing());
//! ```

pub mod binding;
pub mod cli;
pub mod cmd;
pub mod core;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod mapper;
pub mod scalar;
pub mod template;

pub use binding::Binding;
pub use error::{LookupError, NoSuchAttributeError, NoSuchVariableError, ResolveError};
pub use mapper::EnvMapper;
pub use scalar::Integer;
