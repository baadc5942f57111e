// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for ertex-defs

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a test definitions file
#[derive(Debug, Error)]
pub enum DefsError {
    /// Test definitions file could not be read as UTF-8 text
    #[error("failed to read test file {path}: {source}")]
    Read {
        /// The path that could not be read
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },
}
