//! Test status taxonomy

use std::fmt;

use serde::{Deserialize, Serialize};

/// Final status of a single test after reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    /// Test ran and every assertion held
    Pass,
    /// An assertion raised by the test framework itself failed
    Fail,
    /// Test raised an uncaught condition, or never ran at all
    Error,
}

impl TestStatus {
    /// Severity used for aggregate CI gating: pass < fail < error
    #[must_use]
    pub fn severity(self) -> u8 {
        match self {
            TestStatus::Pass => 0,
            TestStatus::Fail => 1,
            TestStatus::Error => 2,
        }
    }

    /// The literal string the status serializes to
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TestStatus::Pass => "pass",
            TestStatus::Fail => "fail",
            TestStatus::Error => "error",
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse verdict reported by a one-line transcript summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The `passed` token
    Passed,
    /// The `FAILED` token
    Failed,
}

impl Verdict {
    /// Coarse status before any condition-block refinement
    #[must_use]
    pub fn coarse_status(self) -> TestStatus {
        match self {
            Verdict::Passed => TestStatus::Pass,
            Verdict::Failed => TestStatus::Fail,
        }
    }
}
