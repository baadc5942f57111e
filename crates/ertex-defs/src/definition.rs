//! ERT test definition types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single `ert-deftest` block extracted from a test file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestDefinition {
    /// Test name as declared in the `ert-deftest` form
    pub name: String,
    /// Body of the test, trimmed of surrounding whitespace
    pub code: String,
}

impl TestDefinition {
    /// Create a definition from a name and body
    #[must_use]
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// Map test names to the 1-based sequence numbers used by the test runner.
///
/// ERT reports progress as `k/N` where `k` is the test's position in
/// ascending name order, not its position in the source file. The same
/// numbering has to be derived here so transcript spans line up with the
/// right test. Duplicate names are unsupported; a repeated name keeps its
/// last rank.
#[must_use]
pub fn sequence_numbers(definitions: &[TestDefinition]) -> HashMap<String, usize> {
    let mut names: Vec<&str> = definitions.iter().map(|d| d.name.as_str()).collect();
    names.sort_unstable();
    names
        .iter()
        .enumerate()
        .map(|(index, name)| ((*name).to_string(), index + 1))
        .collect()
}
