// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! End-to-end reconciliation tests over the robot fixtures
//!
//! These tests drive the library pipeline (extraction, scanning,
//! reconciliation) against a realistic definitions file and batch
//! transcript and pin down the exact JSON that falls out.

use std::path::{Path, PathBuf};

use ertex::report::{ExitCode, build_report};
use ertex_defs::TestFile;
use ertex_transcript::Transcript;
use serde_json::{Value, json};
use similar_asserts::assert_eq;

/// Get the fixtures directory for test data
fn fixtures_dir() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    Path::new(&manifest_dir).join("tests/fixtures")
}

#[test]
fn test_robot_fixture_reconciles_to_expected_json() {
    let file = TestFile::load(fixtures_dir().join("robot-tests.el")).expect("fixture");
    let transcript = Transcript::load(fixtures_dir().join("robot-run.txt")).expect("fixture");

    let report = build_report(&file.definitions(), &transcript);
    assert_eq!(report.exit_code, ExitCode::Error);

    let actual: Value = serde_json::from_str(&report.to_json().expect("serialize")).expect("json");
    let expected = json!([
        {
            "name": "name-is-persistent",
            "test_code": "(should (equal (robot-name *robbie*)\n                 (robot-name *robbie*)))",
            "status": "pass",
            "message": null
        },
        {
            "name": "different-robots-have-different-names",
            "test_code": "(should-not (equal (robot-name (make-robot))\n                     (robot-name (make-robot))))",
            "status": "pass",
            "message": null,
            "output": "\"1DG190\""
        },
        {
            "name": "name-matches-expected-pattern",
            "test_code": "(let ((name (robot-name *robbie*)))\n    (should (string-match-p \"^[A-Z][A-Z][0-9][0-9][0-9]$\" name)))",
            "status": "fail",
            "message": "(ert-test-failed\n     ((should (string-match-p pattern name))\n      :form (string-match-p \"^[A-Z][A-Z][0-9][0-9][0-9]$\" \"1XW454\")\n      :value nil))",
            "output": "\"1XW454\""
        },
        {
            "name": "name-can-be-reset",
            "test_code": "(reset-robot *robbie*)\n  (should (robot-name *robbie*))",
            "status": "error",
            "message": "(wrong-type-argument hash-table-p nil)",
            "output": "Test name-can-be-reset condition:\n    (wrong-type-argument hash-table-p nil)"
        }
    ]);
    assert_eq!(actual, expected);
}

#[test]
fn test_records_follow_definition_file_order() {
    let file = TestFile::load(fixtures_dir().join("robot-tests.el")).expect("fixture");
    let transcript = Transcript::load(fixtures_dir().join("robot-run.txt")).expect("fixture");

    let report = build_report(&file.definitions(), &transcript);
    let names: Vec<&str> = report.results.iter().map(|r| r.name.as_str()).collect();

    // File order, even though the runner numbered the tests by name
    assert_eq!(
        names,
        vec![
            "name-is-persistent",
            "different-robots-have-different-names",
            "name-matches-expected-pattern",
            "name-can-be-reset",
        ]
    );
}

#[test]
fn test_reconciliation_is_idempotent() {
    let file = TestFile::load(fixtures_dir().join("robot-tests.el")).expect("fixture");
    let transcript = Transcript::load(fixtures_dir().join("robot-run.txt")).expect("fixture");
    let definitions = file.definitions();

    let first = build_report(&definitions, &transcript);
    let second = build_report(&definitions, &transcript);
    assert_eq!(
        first.to_json().expect("serialize"),
        second.to_json().expect("serialize")
    );
}
