// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   names, template   type-level reads only
//!   get, check        instance-level reads
//! ```

pub mod check;
pub mod names;
pub mod template;

#[cfg(test)]
mod tests;
