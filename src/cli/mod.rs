//! Command-line interface for sizecap
//!
//! This module provides the CLI structure and execution for sizecap. It uses
//! clap for argument parsing and adapts the checker core to a command-line
//! host: render the report, then fail the run with a non-zero exit when any
//! file is oversized.

use anyhow::Result;
use clap::Parser;

mod output;

pub use output::Output;

use crate::checker::{SizeChecker, SizeReport};

/// Sizecap - fail the build when files exceed a byte limit
///
/// The file list is taken as already resolved by the calling pipeline; no
/// glob expansion or directory walking is performed.
#[derive(Parser)]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Maximum allowed file size in bytes (a file exactly at the limit passes)
    #[arg(
        short = 'm',
        long,
        value_name = "BYTES",
        env = "SIZECAP_MAX_BYTES"
    )]
    pub max_bytes: u64,

    /// Files to check, in the order violations should be reported
    #[arg(value_name = "FILE")]
    pub paths: Vec<String>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Execute the check
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);
        let output = Output::new(self.verbose, self.quiet);

        output.verbose(&format!(
            "Checking {} files against a {} byte limit",
            self.paths.len(),
            self.max_bytes
        ));

        let checker = SizeChecker::new(self.max_bytes);
        let report = checker.check_paths(&self.paths)?;

        display_report(&report, checker.max_bytes(), &self.format, &output)
    }
}

/// Render the report in the requested format, then signal failure if needed
///
/// The returned error is the fatal signal: main propagates it, printing the
/// remediation message to stderr and exiting non-zero.
fn display_report(
    report: &SizeReport,
    max_bytes: u64,
    format: &str,
    output: &Output,
) -> Result<()> {
    match format {
        "json" => {
            let json_output = serde_json::to_string_pretty(report)?;
            println!("{}", json_output);
        }
        _ => {
            if report.passed() {
                output.success("All files ok.");
            } else {
                output.error(&format!("Some files are over [{}] bytes.", max_bytes));
                for violation in &report.violations {
                    output.writeln(&violation.path);
                }
            }
        }
    }

    if !report.passed() {
        anyhow::bail!("Please ensure files are no larger than [{}] bytes.", max_bytes);
    }

    Ok(())
}

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            tracing_subscriber::EnvFilter::new("debug")
        } else {
            tracing_subscriber::EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
