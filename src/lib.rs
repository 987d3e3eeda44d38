//! # Sizecap - File Size Limits for Build Pipelines
//!
//! A single-purpose validation helper that checks a resolved list of files
//! against a maximum byte size and fails the host run when any file is
//! oversized. Sizecap owns no file discovery and no configuration schema;
//! the host supplies the threshold and the path list.
//!
//! ## Quick Start
//!
//! ```bash
//! # Install sizecap
//! cargo install sizecap
//!
//! # Check files against a 100 KB ceiling
//! sizecap --max-bytes 102400 dist/app.js dist/app.css
//! ```
//!
//! Embedding hosts use [`SizeChecker`] directly and render the returned
//! [`SizeReport`] through their own sink.

pub mod checker;
pub mod cli;

pub use checker::{SizeChecker, SizeReport, SizeViolation};
pub use cli::{Cli, Output};

/// Result type alias for sizecap operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
