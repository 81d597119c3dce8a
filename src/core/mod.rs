// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment access and attribute resolution.
//!
//! ```text
//!              core
//!               |
//!        +------+------+
//!        |             |
//!        v             v
//!       env         accessor
//!        |             |
//!   ReadEnv         lookup_raw
//!   SystemEnv       resolve::<T: FromStr>
//!   Env (map)
//!   Source
//! ```

pub mod accessor;
pub mod env;
