//! CLI command handlers
//!
//! This module contains all CLI-related functionality including:
//! - Argument parsing structures
//! - Command implementations
//! - Report formatting

pub mod args;
pub mod commands;
pub mod format;
pub mod router;

// Re-export the main CLI structures for convenience
pub use args::{Cli, Commands};
pub use router::{dispatch, execute_command};
