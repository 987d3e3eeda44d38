//! File size verification
//!
//! This module is the functional core of sizecap: stat each candidate path,
//! compare its size to the configured ceiling, and collect violations into a
//! [`SizeReport`]. It performs no printing and no process exit; rendering the
//! report and failing the run belong to the caller.

mod types;

pub use types::{CheckStats, SizeReport, SizeViolation};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Checks files against a maximum byte size
///
/// The threshold is inclusive: a file exactly at the limit passes, only a
/// strictly larger one is a violation. Each pass re-reads the filesystem;
/// nothing is cached between calls.
pub struct SizeChecker {
    max_bytes: u64,
}

impl SizeChecker {
    /// Create a checker with the given byte ceiling
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    /// The configured byte ceiling
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Check whether a single file is strictly over the limit
    ///
    /// Fails if the path cannot be stat'ed (missing file, permission denied,
    /// broken symlink); that error is not translated into a violation.
    pub fn is_over_limit<P: AsRef<Path>>(&self, path: P) -> Result<bool> {
        Ok(file_size(path.as_ref())? > self.max_bytes)
    }

    /// Check every path in input order, collecting the oversized ones
    ///
    /// All paths are measured before the report is returned, so the caller
    /// always sees the complete violation list rather than the first hit.
    /// Input ordering is preserved, duplicates included. The first path that
    /// cannot be stat'ed aborts the pass with its access error.
    pub fn check_paths(&self, paths: &[String]) -> Result<SizeReport> {
        let start_time = std::time::Instant::now();
        let mut violations = Vec::new();

        for path in paths {
            let size = file_size(Path::new(path))?;
            tracing::debug!("{}: {} bytes (limit {})", path, size, self.max_bytes);

            if size > self.max_bytes {
                violations.push(SizeViolation {
                    path: path.clone(),
                    size_bytes: size,
                    max_bytes: self.max_bytes,
                });
            }
        }

        let stats = CheckStats {
            files_checked: paths.len(),
            total_violations: violations.len(),
            check_duration_ms: start_time.elapsed().as_millis() as u64,
        };

        Ok(SizeReport { violations, stats })
    }
}

/// Synchronous size query via file metadata
fn file_size(path: &Path) -> Result<u64> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to read metadata for {}", path.display()))?;
    Ok(metadata.len())
}
