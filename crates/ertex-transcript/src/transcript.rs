// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! ERT batch transcript scanning
//!
//! Three independent passes over the transcript text:
//!
//! - [`parse_verdicts`] reads one-line summaries like
//!   `passed  3/4  name-is-persistent (0.000049 sec)`;
//! - [`find_condition`] reads labeled blocks like
//!   `Test name-can-be-reset condition:` followed by the condition form
//!   and the FAILED verdict line for the same test;
//! - [`captured_output`] reads whatever the test printed between the
//!   previous result announcement and its own.
//!
//! All three only ever fail to find a match; malformed sections are
//! never an error.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::TranscriptError;
use crate::status::{TestStatus, Verdict};

/// Condition function ERT raises when an assertion made by the test
/// framework itself fails; any other condition function is an error
pub const TEST_FAILED_FUNCTION: &str = "ert-test-failed";

/// Captured output beyond this many characters is cut off
pub const OUTPUT_LIMIT: usize = 500;

/// Notice attached to the failure message when output is cut off
pub const TRUNCATION_NOTICE: &str = "Output was truncated. Please limit to 500 chars";

// Matches verdict lines like `passed  3/4  name-is-persistent (0.000049 sec)`.
// The duration suffix is optional; the verdict tokens are case-sensitive.
static VERDICT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<verdict>passed|FAILED)\s+(?P<number>\d+)/(?P<total>\d+)\s+(?P<name>[\w-]+)\s*(?:\(\d+\.\d+\ssec\))?",
    )
    .expect("verdict pattern is valid")
});

/// Scan the transcript for one-line verdict summaries.
///
/// Returns a map from test name to coarse verdict. When a name appears
/// on several verdict lines the last one wins. Names that never appear
/// are simply absent; the reconciler treats absence as a test that
/// failed to run.
#[must_use]
pub fn parse_verdicts(text: &str) -> HashMap<String, Verdict> {
    let mut verdicts = HashMap::new();
    for caps in VERDICT_RE.captures_iter(text) {
        let verdict = if &caps["verdict"] == "passed" {
            Verdict::Passed
        } else {
            Verdict::Failed
        };
        verdicts.insert(caps["name"].to_string(), verdict);
    }
    verdicts
}

/// A condition block explaining why a test did not pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// The full condition form, trimmed
    pub message: String,
    /// [`TestStatus::Fail`] when the condition was raised by the test
    /// framework itself, [`TestStatus::Error`] for anything else
    pub status: TestStatus,
}

/// Locate the labeled condition block for `name`.
///
/// The block runs from `Test <name> condition:` through one or more
/// non-empty lines and is terminated by the FAILED verdict line for the
/// same name. Only the first block is used, so re-running over the same
/// transcript always yields the same match. Returns `None` when the
/// transcript carries no such block.
#[must_use]
pub fn find_condition(name: &str, text: &str) -> Option<Condition> {
    let escaped = regex::escape(name);
    let re = compile(&format!(
        r"Test\s{escaped}\scondition:\s+(?P<condition>\((?P<function>.+)(?:\n.+)+)FAILED\s+\d+/\d+\s+{escaped}"
    ))?;
    let caps = re.captures(text)?;

    let message = caps["condition"].trim().to_string();
    let status = if condition_function(&caps["function"]) == TEST_FAILED_FUNCTION {
        TestStatus::Fail
    } else {
        TestStatus::Error
    };
    debug!(name, %status, "found condition block");
    Some(Condition { message, status })
}

/// First function token inside the condition form
fn condition_function(first_line: &str) -> &str {
    let end = first_line
        .find(|c: char| !(c.is_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(first_line.len());
    &first_line[..end]
}

/// Output captured between consecutive result announcements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Captured text, trimmed, at most [`OUTPUT_LIMIT`] characters
    pub text: String,
    /// True when the span exceeded [`OUTPUT_LIMIT`] and was cut off
    pub truncated: bool,
}

/// Extract the text printed between the previous test's result
/// announcement and this test's own.
///
/// `number` is the test's 1-based sequence number in the run. The start
/// boundary is the end of the harness startup banner (the first `)`
/// character) for the first test, and the verdict line for sequence
/// number `number - 1` otherwise. The end boundary is the verdict line
/// for `number` or the `Test <name> backtrace` label, whichever comes
/// first. Returns `None` when either boundary is missing; tests that
/// print nothing yield an empty span, not `None`.
#[must_use]
pub fn captured_output(name: &str, number: usize, text: &str) -> Option<CapturedOutput> {
    let start = output_start(number, text)?;
    let end = output_end(name, number, text, start)?;

    let span = text[start..end].trim();
    let (text, truncated) = if span.chars().count() > OUTPUT_LIMIT {
        (span.chars().take(OUTPUT_LIMIT).collect(), true)
    } else {
        (span.to_string(), false)
    };
    Some(CapturedOutput { text, truncated })
}

/// Start boundary: end of the previous result announcement
fn output_start(number: usize, text: &str) -> Option<usize> {
    match number {
        // Sequence numbers are 1-based
        0 => None,
        1 => text.find(')').map(|at| at + 1),
        _ => {
            let prev = number - 1;
            let re = compile(&format!(
                r"(?:passed|FAILED)\s+{prev}/\d+\s+[\w-]+\s*(?:\(\d+\.\d+\ssec\))?"
            ))?;
            re.find(text).map(|m| m.end())
        }
    }
}

/// End boundary: this test's verdict line or backtrace label, whichever
/// appears first after `from`
fn output_end(name: &str, number: usize, text: &str, from: usize) -> Option<usize> {
    let tail = &text[from..];

    let verdict_re = compile(&format!(r"(?:passed|FAILED)\s+{number}/\d+\s+[\w-]+"))?;
    let verdict_at = verdict_re.find(tail).map(|m| m.start());

    let escaped = regex::escape(name);
    let backtrace_re = compile(&format!(r"Test\s{escaped}\sbacktrace"))?;
    let backtrace_at = backtrace_re.find(tail).map(|m| m.start());

    let at = match (verdict_at, backtrace_at) {
        (Some(a), Some(b)) => a.min(b),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => return None,
    };
    Some(from + at)
}

/// Compile an interpolated scan pattern, degrading to a no-match on
/// failure. Names are escaped before interpolation, so failure here is
/// unreachable for patterns built from extracted test names.
fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(error) => {
            debug!(%error, pattern, "scan pattern failed to compile");
            None
        }
    }
}

/// An ERT run transcript loaded into memory
#[derive(Debug, Clone)]
pub struct Transcript {
    path: PathBuf,
    text: String,
}

impl Transcript {
    /// Load a transcript from disk as UTF-8 text
    ///
    /// # Errors
    ///
    /// Returns `TranscriptError::Read` if the file cannot be read or is
    /// not valid UTF-8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TranscriptError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| TranscriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "loaded transcript");
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Build a transcript directly from text
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            path: PathBuf::from("<memory>"),
            text: text.into(),
        }
    }

    /// Path the transcript was loaded from (`<memory>` for in-memory text)
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw transcript text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Scan for one-line verdict summaries; see [`parse_verdicts`]
    #[must_use]
    pub fn verdicts(&self) -> HashMap<String, Verdict> {
        parse_verdicts(&self.text)
    }

    /// Locate the condition block for `name`; see [`find_condition`]
    #[must_use]
    pub fn condition(&self, name: &str) -> Option<Condition> {
        find_condition(name, &self.text)
    }

    /// Extract the output captured for `name`; see [`captured_output`]
    #[must_use]
    pub fn captured_output(&self, name: &str, number: usize) -> Option<CapturedOutput> {
        captured_output(name, number, &self.text)
    }
}
