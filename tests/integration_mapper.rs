// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for compiled models against the live process environment.
//!
//! Every test that touches the process environment is `#[serial]`.

#![allow(clippy::float_cmp)]

use envmap::error::{LookupError, ResolveError};
use envmap::{EnvMapper, Integer, env_mapper};
use serial_test::serial;

const UNSET_VAR: &str = "THIS_DEFINITELY_DOESNT_EXIST_123456";

/// Sets the variables used in these tests and returns the name of one known
/// to be unset.
fn setenv() -> &'static str {
    let vars = [
        ("ENVTEST_EMPTY", ""),
        ("ENVTEST_STR1", "env test str 1"),
        ("ENVTEST_STR2", "env test str 2"),
        ("ENVTEST_INT_NEG", "-1"),
        ("ENVTEST_INT_ZERO", "0"),
        ("ENVTEST_INT_POS", "1"),
        ("ENVTEST_INT_POSPLUS", "+1"),
        ("ENVTEST_INT_BIG", "19223372036854775807"),
        ("ENVTEST_INT_SEPARATED", "1__0"),
        ("ENVTEST_BOOL_TRUE", "true"),
        ("ENVTEST_BOOL_FALSE", "false"),
        ("ENVTEST_FLOAT_NEG", "-2.5"),
        ("ENVTEST_FLOAT_ZERO", "0.0"),
        ("ENVTEST_FLOAT_POS", "2.5"),
    ];
    // SAFETY: every caller is #[serial], so no other test thread touches the environment
    unsafe {
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
        std::env::remove_var(UNSET_VAR);
    }
    assert!(
        std::env::var_os(UNSET_VAR).is_none(),
        "could not provide an unset environment variable"
    );
    UNSET_VAR
}

env_mapper! {
    struct IntEnv0 {
        int_zero: Integer = "ENVTEST_INT_ZERO",
    }
}

env_mapper! {
    struct InvalidEnv {
        dne: String = "THIS_DEFINITELY_DOESNT_EXIST_123456",
    }
}

env_mapper! {
    struct StrEnv {
        empty: String = "ENVTEST_EMPTY",
        str1: String = "ENVTEST_STR1",
        str2: String = "ENVTEST_STR2",
    }
}

env_mapper! {
    struct IntEnv {
        empty: Integer = "ENVTEST_EMPTY",
        negative: Integer = "ENVTEST_INT_NEG",
        zero: Integer = "ENVTEST_INT_ZERO",
        positive: Integer = "ENVTEST_INT_POS",
        positive_plus: Integer = "ENVTEST_INT_POSPLUS",
        big: Integer = "ENVTEST_INT_BIG",
        separated: Integer = "ENVTEST_INT_SEPARATED",
    }
}

env_mapper! {
    struct FloatEnv {
        empty: f64 = "ENVTEST_EMPTY",
        negative: f64 = "ENVTEST_FLOAT_NEG",
        zero: f64 = "ENVTEST_FLOAT_ZERO",
        positive: f64 = "ENVTEST_FLOAT_POS",
    }
}

env_mapper! {
    struct BoolEnv {
        yes: bool = "ENVTEST_BOOL_TRUE",
        no: bool = "ENVTEST_BOOL_FALSE",
        word: bool = "ENVTEST_STR1",
    }
}

env_mapper! {
    struct FooEnv {
        bar: String = "BAZ",
    }
}

#[test]
fn model_is_transferable() {
    // Through the type it is just the variable name, set or not.
    assert_eq!(IntEnv0::variable_name("int_zero").unwrap(), "ENVTEST_INT_ZERO");
    assert_eq!(
        InvalidEnv::variable_name("dne").unwrap(),
        "THIS_DEFINITELY_DOESNT_EXIST_123456"
    );
}

#[test]
#[serial]
fn raises_iff_var_does_not_exist_on_access() {
    let unset = setenv();

    // Constructing reads nothing.
    let env_inst = InvalidEnv::new();

    let err = env_inst.dne().unwrap_err();
    assert!(matches!(err, ResolveError::NoSuchVariable(ref e) if e.variable() == unset));
    assert!(err.to_string().contains("THIS_DEFINITELY_DOESNT_EXIST_123456"));

    // The type-level read still succeeds.
    assert_eq!(InvalidEnv::variable_name("dne").unwrap(), unset);
}

#[test]
#[serial]
fn string_models() {
    setenv();

    assert_eq!(StrEnv::new().empty().unwrap(), "");
    assert_eq!(StrEnv::new().str1().unwrap(), "env test str 1");
    assert_eq!(StrEnv::new().str2().unwrap(), "env test str 2");
}

#[test]
#[serial]
fn int_models() {
    setenv();

    let int_env = IntEnv::new();
    assert_eq!(int_env.negative().unwrap(), Integer::from(-1));
    assert_eq!(int_env.zero().unwrap(), Integer::from(0));
    assert_eq!(int_env.positive().unwrap(), Integer::from(1));
    assert_eq!(int_env.positive_plus().unwrap(), Integer::from(1));
    assert_eq!(
        int_env.big().unwrap(),
        "19223372036854775807".parse::<Integer>().unwrap()
    );
    assert_eq!(int_env.big().unwrap().to_string(), "19223372036854775807");

    let err = int_env.separated().unwrap_err();
    assert!(!err.is_missing());
    assert_eq!(err.to_string(), "invalid digit found in string");

    let err = int_env.empty().unwrap_err();
    assert!(!err.is_missing(), "should be the native parse error");
    assert_eq!(
        err.to_string(),
        "".parse::<Integer>().unwrap_err().to_string()
    );
}

#[test]
#[serial]
fn float_models() {
    setenv();

    let float_env = FloatEnv::new();
    assert_eq!(float_env.negative().unwrap(), -2.5);
    assert_eq!(float_env.zero().unwrap(), 0.0);
    assert_eq!(float_env.positive().unwrap(), 2.5);

    let err = float_env.empty().unwrap_err();
    assert_eq!(err.parse_error(), Some(&"".parse::<f64>().unwrap_err()));
}

#[test]
#[serial]
fn bool_models() {
    setenv();

    let bool_env = BoolEnv::new();
    assert!(bool_env.yes().unwrap());
    assert!(!bool_env.no().unwrap());
    assert_eq!(
        bool_env.word().unwrap_err().parse_error(),
        Some(&"env test str 1".parse::<bool>().unwrap_err())
    );
}

#[test]
#[serial]
fn raises_attribute_error_logically() {
    setenv();
    // SAFETY: #[serial]
    unsafe {
        std::env::set_var("does_not_exist_as_a_mapping", "set anyway");
    }

    let foo_env = FooEnv::new();
    assert!(FooEnv::variable_name("does_not_exist_as_a_mapping").is_err());
    assert!(matches!(
        foo_env.raw("does_not_exist_as_a_mapping"),
        Err(LookupError::NoSuchAttribute(_))
    ));

    // SAFETY: #[serial]
    unsafe {
        std::env::remove_var("does_not_exist_as_a_mapping");
    }
}

#[test]
#[serial]
fn reads_are_never_cached() {
    setenv();
    let int_env = IntEnv::new();
    assert_eq!(int_env.zero().unwrap(), Integer::from(0));

    // SAFETY: #[serial]
    unsafe {
        std::env::set_var("ENVTEST_INT_ZERO", "5");
    }
    assert_eq!(int_env.zero().unwrap(), Integer::from(5));

    // SAFETY: #[serial]
    unsafe {
        std::env::remove_var("ENVTEST_INT_ZERO");
    }
    assert!(int_env.zero().unwrap_err().is_missing());
    assert_eq!(IntEnv::variable_name("zero").unwrap(), "ENVTEST_INT_ZERO");
}

#[test]
#[cfg(unix)]
#[serial]
fn non_unicode_value_is_reported() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    // SAFETY: #[serial]
    unsafe {
        std::env::set_var("ENVTEST_STR1", OsStr::from_bytes(b"caf\xe9"));
    }

    let err = StrEnv::new().str1().unwrap_err();
    assert!(matches!(err, ResolveError::NotUnicode { ref variable } if variable == "ENVTEST_STR1"));

    setenv();
}
