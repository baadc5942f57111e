// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Reconciliation of test definitions with transcript evidence
//!
//! For each extracted definition, in file order: resolve the coarse
//! verdict, refine it with the condition block when one exists, attach
//! the captured output, and fold the result's severity into the
//! aggregate exit code. Unresolved tests are records with status
//! `error`, never a process failure.

use serde::{Deserialize, Serialize};
use tracing::debug;

use ertex_defs::{TestDefinition, sequence_numbers};
use ertex_transcript::{TRUNCATION_NOTICE, TestStatus, Transcript};

/// Process exit code for CI gating, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExitCode {
    /// Every test passed
    Pass,
    /// The worst status was a failed assertion
    Fail,
    /// The worst status was an error, or the run itself failed
    Error,
}

impl ExitCode {
    /// Numeric code handed to the operating system
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Pass => 0,
            ExitCode::Fail => 1,
            ExitCode::Error => 2,
        }
    }

    /// Exit code corresponding to a single test's status
    #[must_use]
    pub fn from_status(status: TestStatus) -> Self {
        match status {
            TestStatus::Pass => ExitCode::Pass,
            TestStatus::Fail => ExitCode::Fail,
            TestStatus::Error => ExitCode::Error,
        }
    }
}

/// Final record emitted for one test definition
///
/// `message` always appears in the JSON (null when absent); `output` is
/// omitted from the object entirely when the test printed nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Test name from the `ert-deftest` form
    pub name: String,
    /// Trimmed body of the test definition
    pub test_code: String,
    /// Final status after condition refinement
    pub status: TestStatus,
    /// Condition message and/or truncation notice
    pub message: Option<String>,
    /// Output captured between result announcements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// A reconciled run: per-test records plus the aggregate exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// One record per definition, in original file order
    pub results: Vec<TestResult>,
    /// Maximum severity across all records
    pub exit_code: ExitCode,
}

impl Report {
    /// Serialize the records as the JSON array printed to stdout
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.results)
    }
}

/// Reconcile definitions with transcript evidence.
///
/// Every definition yields exactly one record, in file order. A test
/// with no verdict line and no condition block is reported as status
/// `error` with no message. The truncation notice joins the message only
/// when the final status is not `pass`.
#[must_use]
pub fn build_report(definitions: &[TestDefinition], transcript: &Transcript) -> Report {
    let numbers = sequence_numbers(definitions);
    let verdicts = transcript.verdicts();

    let mut exit_code = ExitCode::Pass;
    let mut results = Vec::with_capacity(definitions.len());

    for definition in definitions {
        let number = numbers[definition.name.as_str()];

        // Coarse status; a test the runner never announced did not run
        let mut status = verdicts
            .get(&definition.name)
            .map_or(TestStatus::Error, |verdict| verdict.coarse_status());
        let mut message = None;

        // A condition block overrides the coarse status outright
        if let Some(condition) = transcript.condition(&definition.name) {
            status = condition.status;
            message = Some(condition.message);
        }

        let captured = transcript.captured_output(&definition.name, number);
        let truncated = captured.as_ref().is_some_and(|c| c.truncated);
        let output = captured
            .map(|c| c.text)
            .filter(|text| !text.is_empty());

        if truncated && status != TestStatus::Pass {
            message = Some(match message {
                Some(existing) => format!("{existing}\n{TRUNCATION_NOTICE}"),
                None => TRUNCATION_NOTICE.to_string(),
            });
        }

        debug!(name = %definition.name, number, %status, "reconciled test");
        exit_code = exit_code.max(ExitCode::from_status(status));
        results.push(TestResult {
            name: definition.name.clone(),
            test_code: definition.code.clone(),
            status,
            message,
            output,
        });
    }

    Report { results, exit_code }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ertex_defs::extract_definitions;
    use similar_asserts::assert_eq;

    const DEFS: &str = "(ert-deftest test-a ()\n  (should t))\n\n\
                        (ert-deftest test-b ()\n  (should nil))\n";

    const RUN: &str = "Running 2 tests (2022-01-04 17:06:51+0200, selector ‘t’)\n\
                       \x20  passed  1/2  test-a (0.000050 sec)\n\
                       Test test-b condition:\n\
                       \x20   (ert-test-failed\n\
                       \x20    ((should nil)\n\
                       \x20     :form nil\n\
                       \x20     :value nil))\n\
                       \x20   FAILED  2/2  test-b (0.000010 sec)\n";

    #[test]
    fn test_pass_and_refined_fail() {
        let definitions = extract_definitions(DEFS);
        let transcript = Transcript::from_text(RUN);
        let report = build_report(&definitions, &transcript);

        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[0].name, "test-a");
        assert_eq!(report.results[0].status, TestStatus::Pass);
        assert_eq!(report.results[0].message, None);

        assert_eq!(report.results[1].name, "test-b");
        assert_eq!(report.results[1].status, TestStatus::Fail);
        let message = report.results[1].message.as_deref().expect("message");
        assert!(message.starts_with("(ert-test-failed"));

        assert_eq!(report.exit_code, ExitCode::Fail);
    }

    #[test]
    fn test_missing_test_is_error_with_null_fields() {
        let definitions = extract_definitions("(ert-deftest ghost-check ()\n  (should t))\n");
        let transcript = Transcript::from_text("Running 0 tests (selector ‘t’)\n");
        let report = build_report(&definitions, &transcript);

        assert_eq!(report.results[0].status, TestStatus::Error);
        assert_eq!(report.results[0].message, None);
        assert_eq!(report.results[0].output, None);
        assert_eq!(report.exit_code, ExitCode::Error);
    }

    #[test]
    fn test_empty_definitions_pass() {
        let report = build_report(&[], &Transcript::from_text(""));
        assert!(report.results.is_empty());
        assert_eq!(report.exit_code, ExitCode::Pass);
        assert_eq!(report.to_json().expect("serialize"), "[]");
    }

    #[test]
    fn test_truncation_notice_joins_existing_message() {
        let definitions = extract_definitions("(ert-deftest noisy-check ()\n  (should nil))\n");
        let noise = "z".repeat(700);
        let run = format!(
            "Running 1 tests (selector ‘t’)\n{noise}\n\
             Test noisy-check condition:\n\
             \x20   (ert-test-failed\n\
             \x20    ((should nil)\n\
             \x20     :value nil))\n\
             \x20   FAILED  1/1  noisy-check (0.000200 sec)\n"
        );
        let report = build_report(&definitions, &Transcript::from_text(run));

        let result = &report.results[0];
        assert_eq!(result.status, TestStatus::Fail);
        let message = result.message.as_deref().expect("message");
        assert!(message.starts_with("(ert-test-failed"));
        assert!(message.ends_with(TRUNCATION_NOTICE));
        assert!(message.contains('\n'));
        assert_eq!(
            result.output.as_deref().expect("output").chars().count(),
            500
        );
    }

    #[test]
    fn test_truncation_notice_is_sole_message_without_condition() {
        let definitions = extract_definitions("(ert-deftest lone-fail ()\n  (should nil))\n");
        let noise = "z".repeat(700);
        let run = format!(
            "Running 1 tests (selector ‘t’)\n{noise}\n   FAILED  1/1  lone-fail (0.000100 sec)\n"
        );
        let report = build_report(&definitions, &Transcript::from_text(run));

        let result = &report.results[0];
        assert_eq!(result.status, TestStatus::Fail);
        assert_eq!(result.message.as_deref(), Some(TRUNCATION_NOTICE));
    }

    #[test]
    fn test_truncation_notice_not_attached_to_passing_test() {
        let definitions = extract_definitions("(ert-deftest chatty-check ()\n  (should t))\n");
        let noise = "z".repeat(700);
        let run = format!(
            "Running 1 tests (selector ‘t’)\n{noise}\n   passed  1/1  chatty-check (0.000100 sec)\n"
        );
        let report = build_report(&definitions, &Transcript::from_text(run));

        let result = &report.results[0];
        assert_eq!(result.status, TestStatus::Pass);
        assert_eq!(result.message, None);
        // Output is still cut to the cap even though no notice is attached
        assert_eq!(
            result.output.as_deref().expect("output").chars().count(),
            500
        );
        assert_eq!(report.exit_code, ExitCode::Pass);
    }

    #[test]
    fn test_empty_output_key_is_omitted() {
        let definitions = extract_definitions(DEFS);
        let transcript = Transcript::from_text(RUN);
        let report = build_report(&definitions, &transcript);

        let json: serde_json::Value =
            serde_json::from_str(&report.to_json().expect("serialize")).expect("valid json");
        let first = &json[0];
        assert!(first.get("output").is_none());
        assert!(first.get("message").is_some());
        assert_eq!(first["message"], serde_json::Value::Null);
        assert_eq!(first["status"], "pass");
    }

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Pass.code(), 0);
        assert_eq!(ExitCode::Fail.code(), 1);
        assert_eq!(ExitCode::Error.code(), 2);
        assert!(ExitCode::Pass < ExitCode::Fail);
        assert!(ExitCode::Fail < ExitCode::Error);
    }
}
