// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! `ert-deftest` block extraction
//!
//! This module recognizes test declaration blocks of the shape
//!
//! ```lisp
//! (ert-deftest name-is-persistent ()
//!   "Test that robot name is persistent."
//!   (should (equal (robot-name *robbie*)
//!                  (robot-name *robbie*))))
//! ```
//!
//! by pattern, not by parsing Emacs Lisp. The docstring line is optional,
//! the body is one or more non-empty lines, and blocks preceded by
//! line-comment markers are treated as absent.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::definition::TestDefinition;
use crate::error::DefsError;

// Matches a named, zero-argument ert-deftest block: optional leading
// semicolons (commented out), the header, an optional one-line docstring,
// then consecutive non-empty body lines up to a balancing paren.
static DEFTEST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?P<semicolons>;+)?\s*\(ert-deftest\s+(?P<name>[\w-]+)\s+\(\)\s*(?P<docstring>".*")?\s*(?P<code>(?:\n.+)+)\)"#,
    )
    .expect("deftest pattern is valid")
});

/// Extract every test declaration block that is not commented out.
///
/// Blocks are returned in file order. The body text is captured verbatim
/// from after the optional docstring up to the block's closing marker,
/// then trimmed. A source with no matching blocks yields an empty vector.
#[must_use]
pub fn extract_definitions(source: &str) -> Vec<TestDefinition> {
    let mut definitions = Vec::new();

    for caps in DEFTEST_RE.captures_iter(source) {
        if caps.name("semicolons").is_some() {
            // Commented out: consume the block, emit nothing
            continue;
        }
        let name = caps["name"].to_string();
        let code = caps["code"].trim().to_string();
        debug!(name = %name, "extracted test definition");
        definitions.push(TestDefinition { name, code });
    }

    definitions
}

/// An ERT test definitions file loaded into memory
#[derive(Debug, Clone)]
pub struct TestFile {
    path: PathBuf,
    source: String,
}

impl TestFile {
    /// Load a test definitions file from disk as UTF-8 text
    ///
    /// # Errors
    ///
    /// Returns `DefsError::Read` if the file cannot be read or is not
    /// valid UTF-8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DefsError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| DefsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = source.len(), "loaded test file");
        Ok(Self {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build a test file directly from source text
    #[must_use]
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            path: PathBuf::from("<memory>"),
            source: source.into(),
        }
    }

    /// Path the file was loaded from (`<memory>` for in-memory sources)
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw source text
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Extract the test declarations contained in this file
    #[must_use]
    pub fn definitions(&self) -> Vec<TestDefinition> {
        extract_definitions(&self.source)
    }
}
