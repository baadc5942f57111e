//! Configuration for the ertex CLI
//!
//! Two required positional arguments name the input artifacts; the
//! remaining flags only tune logging. Missing positionals surface as
//! clap's usage message on stderr with exit code 2, which doubles as the
//! error-level exit code expected by CI consumers.

use std::path::PathBuf;

use clap::Parser;

/// ertex - structured JSON reports from Emacs ERT test runs
#[derive(Parser, Debug, Clone)]
#[command(name = "ertex")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to the Emacs Lisp file containing the ert-deftest declarations
    pub test_file: PathBuf,

    /// Path to the console transcript captured from the batch run
    pub transcript: PathBuf,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never interleave with the
    /// JSON report on stdout.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}
