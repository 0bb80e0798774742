//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use crate::error::Error;
use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// Analyzer errors print their own message (`Error: The file 'x' does not
/// exist.`); anything else prints the flattened message, plus the numbered
/// cause chain when `verbose >= 1`.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {:#}", error);
    std::process::exit(report_error(&error, verbose))
}

/// Print `error` to stderr and return the exit code to use
pub fn report_error(error: &anyhow::Error, verbose: u8) -> i32 {
    let analyzer_error = error.chain().find_map(|cause| cause.downcast_ref::<Error>());

    match analyzer_error {
        Some(err) if err.is_source_not_found() => eprintln!("Error: {err}"),
        _ => eprintln!("Error: {error:#}"),
    }

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    analyzer_error.map_or(1, Error::exit_code)
}
