// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! ertex-transcript: ERT run transcript scanning for ertex
//!
//! This library crate scans the console transcript of an ERT batch run
//! for three kinds of evidence about each test: one-line verdict
//! summaries, labeled condition blocks explaining why a test did not
//! pass, and the free-form output printed between consecutive result
//! announcements.

#![warn(missing_docs)]

//! # Example
//!
//! ```
//! use ertex_transcript::{Verdict, parse_verdicts};
//!
//! let verdicts = parse_verdicts("   passed  1/1  answer-is-42 (0.000051 sec)");
//! assert_eq!(verdicts["answer-is-42"], Verdict::Passed);
//! ```

pub mod error;
pub mod status;
pub mod transcript;

pub use error::TranscriptError;
pub use status::{TestStatus, Verdict};
pub use transcript::{
    CapturedOutput, Condition, OUTPUT_LIMIT, TEST_FAILED_FUNCTION, TRUNCATION_NOTICE, Transcript,
    captured_output, find_condition, parse_verdicts,
};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::TranscriptError;
    pub use crate::status::{TestStatus, Verdict};
    pub use crate::transcript::{CapturedOutput, Condition, Transcript};
}
