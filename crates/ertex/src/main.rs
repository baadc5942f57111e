//! ertex: structured JSON reports from Emacs ERT test runs
//!
//! Reads an ERT test definitions file and the console transcript of a
//! batch run, reconciles the two, prints a JSON array of per-test
//! records to stdout, and exits with the worst status seen
//! (pass = 0, fail = 1, error = 2).

use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, info};

use ertex::config::Config;
use ertex::report::{ExitCode, build_report};
use ertex_defs::TestFile;
use ertex_transcript::Transcript;

fn main() {
    let config = Config::parse();

    // Logs go to stderr; stdout carries only the JSON report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    match run(&config) {
        Ok(exit_code) => process::exit(exit_code.code()),
        Err(error) => {
            error!("{error:#}");
            process::exit(ExitCode::Error.code());
        }
    }
}

/// Read both inputs, reconcile them, and print the JSON report
fn run(config: &Config) -> anyhow::Result<ExitCode> {
    let test_file = TestFile::load(&config.test_file).context("reading test definitions")?;
    let transcript = Transcript::load(&config.transcript).context("reading run transcript")?;

    let definitions = test_file.definitions();
    debug!(count = definitions.len(), "extracted test definitions");

    let report = build_report(&definitions, &transcript);
    println!("{}", report.to_json().context("serializing report")?);

    info!(
        tests = report.results.len(),
        exit_code = report.exit_code.code(),
        "report complete"
    );
    Ok(report.exit_code)
}
