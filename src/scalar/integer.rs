// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arbitrary precision integer target type.
//!
//! ```text
//! accepted:  [+-]?[0-9]+      "0"  "-1"  "+1"  "19223372036854775807"
//! rejected:  ""  "+"  "1_"  "1__0"  "_1"  "-+1"  " 1"  "0x10"
//! ```
//!
//! `BigInt::from_str` also skips `_` separators and takes a second sign
//! after `-`. Those forms are rejected here, with the error `BigInt` itself
//! reports for an invalid digit.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, ParseBigIntError};

/// Arbitrary precision integer, the canonical integer target type.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer(BigInt);

impl Integer {
    #[must_use]
    pub const fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> BigInt {
        self.0
    }
}

impl FromStr for Integer {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
        if digits.bytes().all(|b| b.is_ascii_digit()) {
            // Covers "" and a lone sign too, which BigInt reports as empty.
            return s.parse().map(Self);
        }
        digits.replace(['_', '+', '-'], "?").parse().map(Self)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<BigInt> for Integer {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl From<Integer> for BigInt {
    fn from(value: Integer) -> Self {
        value.0
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Integer {
                fn from(value: $ty) -> Self {
                    Self(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
