// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Binding, find, first_duplicate};

const BINDINGS: &[Binding<'static>] = &[
    Binding::new("host", "String", "SERVICE_HOST"),
    Binding::new("port", "Integer", "SERVICE_PORT"),
];

#[test]
fn test_find() {
    assert_eq!(find(BINDINGS, "port").map(|b| b.variable), Some("SERVICE_PORT"));
    assert_eq!(find(BINDINGS, "SERVICE_PORT"), None);
}

#[test]
fn test_first_duplicate() {
    assert_eq!(first_duplicate(BINDINGS), None);

    let dup = [
        Binding::new("a", "str", "A"),
        Binding::new("b", "str", "B"),
        Binding::new("a", "int", "C"),
    ];
    assert_eq!(first_duplicate(&dup), Some("a"));
}

#[test]
fn test_binding_serializes() {
    let json = serde_json::to_string(&BINDINGS[1]).unwrap();
    insta::assert_snapshot!(json, @r#"{"attribute":"port","target":"Integer","variable":"SERVICE_PORT"}"#);
}
