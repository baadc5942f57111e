// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for ertex-transcript

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a run transcript
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// Transcript file could not be read as UTF-8 text
    #[error("failed to read transcript {path}: {source}")]
    Read {
        /// The path that could not be read
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },
}
