// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key type for owned environment maps.
//!
//! ```text
//! EnvKey: case-insensitive on Windows (PATH == Path == path)
//!         exact elsewhere (PATH != Path)
//! ```

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Whether variable names compare case-insensitively on this host.
pub(super) const CASE_INSENSITIVE: bool = cfg!(windows);

/// An environment variable name, compared the way the host compares them.
#[derive(Debug, Clone, Eq)]
pub(super) struct EnvKey(String);

impl EnvKey {
    pub(super) fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        if CASE_INSENSITIVE {
            self.0.eq_ignore_ascii_case(&other.0)
        } else {
            self.0 == other.0
        }
    }
}

impl Hash for EnvKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if CASE_INSENSITIVE {
            for c in self.0.chars() {
                c.to_ascii_lowercase().hash(state);
            }
        } else {
            self.0.hash(state);
        }
    }
}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    fn cmp(&self, other: &Self) -> Ordering {
        if CASE_INSENSITIVE {
            let lhs = self.0.bytes().map(|b| b.to_ascii_lowercase());
            let rhs = other.0.bytes().map(|b| b.to_ascii_lowercase());
            lhs.cmp(rhs)
        } else {
            self.0.cmp(&other.0)
        }
    }
}
