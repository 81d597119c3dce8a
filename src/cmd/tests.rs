// envmap: Typed environment variable bindings
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::check::{CheckReport, CheckStatus};
use super::names::format_names;
use crate::core::env::Env;
use crate::manifest::{ManifestLoader, ManifestModel};

const MANIFEST: &str = r#"
name = "worker"

[[binding]]
attribute = "queue"
type = "str"
variable = "WORKER_QUEUE"

[[binding]]
attribute = "concurrency"
type = "int"
variable = "WORKER_CONCURRENCY"

[[binding]]
attribute = "verbose"
type = "bool"
variable = "WORKER_VERBOSE"
"#;

fn model(env: Env) -> ManifestModel {
    ManifestLoader::new()
        .add_toml_str(MANIFEST)
        .build()
        .unwrap()
        .with_env(env)
}

#[test]
fn test_format_names_aligns_columns() {
    let lines = format_names(&model(Env::new()));
    insta::assert_snapshot!(lines.join("\n"), @r"
    queue        str   WORKER_QUEUE
    concurrency  int   WORKER_CONCURRENCY
    verbose      bool  WORKER_VERBOSE
    ");
}

#[test]
fn test_check_report() {
    let env: Env = [("WORKER_QUEUE", "jobs"), ("WORKER_CONCURRENCY", "")]
        .into_iter()
        .collect();
    let report = CheckReport::run(&model(env));

    assert_eq!(report.failures(), 2);
    assert!(matches!(report.entries[0].status, CheckStatus::Ok(_)));
    assert!(matches!(report.entries[1].status, CheckStatus::Invalid(_)));
    assert_eq!(report.entries[2].status, CheckStatus::Missing);

    let lines = report.format_lines();
    assert_eq!(lines[0], "ok       queue = jobs");
    assert!(lines[1].starts_with("invalid  concurrency (WORKER_CONCURRENCY: "));
    assert_eq!(lines[2], "missing  verbose (WORKER_VERBOSE is not set)");
}

#[test]
fn test_check_report_all_ok() {
    let env: Env = [
        ("WORKER_QUEUE", "jobs"),
        ("WORKER_CONCURRENCY", "+8"),
        ("WORKER_VERBOSE", "true"),
    ]
    .into_iter()
    .collect();
    let report = CheckReport::run(&model(env));

    assert_eq!(report.failures(), 0);
    insta::assert_snapshot!(report.format_lines().join("\n"), @r"
    ok       queue = jobs
    ok       concurrency = 8
    ok       verbose = true
    ");
}
