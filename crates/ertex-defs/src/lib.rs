// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! ertex-defs: ERT test definition extraction for ertex
//!
//! This library crate scans an Emacs Lisp test file for `ert-deftest`
//! declarations and yields the test names and body code, ready for
//! reconciliation with a test-run transcript.

#![warn(missing_docs)]

//! # Example
//!
//! ```
//! use ertex_defs::extract_definitions;
//!
//! let source = "(ert-deftest answer-is-42 ()\n  (should (= (answer) 42)))";
//! let defs = extract_definitions(source);
//! assert_eq!(defs[0].name, "answer-is-42");
//! assert_eq!(defs[0].code, "(should (= (answer) 42))");
//! ```

pub mod definition;
pub mod error;
pub mod parser;

pub use definition::{TestDefinition, sequence_numbers};
pub use error::DefsError;
pub use parser::{TestFile, extract_definitions};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::definition::{TestDefinition, sequence_numbers};
    pub use crate::error::DefsError;
    pub use crate::parser::{TestFile, extract_definitions};
}
