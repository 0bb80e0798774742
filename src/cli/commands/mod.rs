//! Command implementation modules
//!
//! This module contains the implementation of each CLI command.
//! Each command returns the rendered report; printing is left to the router.

pub mod compare;
pub mod frequency;
pub mod search;
pub mod summary;

// Re-export command execution functions
pub use compare::run_compare_command;
pub use frequency::run_frequency_command;
pub use search::run_search_command;
pub use summary::run_summary_command;
