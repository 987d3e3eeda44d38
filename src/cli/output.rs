//! Output handling for sizecap
//!
//! Provides consistent, styled CLI output. Hosts embedding the library can
//! construct their own `Output` (or bypass it entirely) to route messages
//! into their task runner's log.

use console::style;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Errors are always shown, even in quiet mode
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print a raw line, unstyled
    ///
    /// Used for machine-relevant lines such as the offending paths; always
    /// shown so the host log carries the full violation list.
    pub fn writeln(&self, message: &str) {
        println!("{}", message);
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }
}
