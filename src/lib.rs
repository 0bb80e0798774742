//! # text-analyzer
//!
//! Summary statistics and word frequency for line-oriented text files.
//!
//! ## Usage
//!
//! ```bash
//! text-analyzer summary notes.txt
//! text-analyzer frequency notes.txt -n 10
//! text-analyzer search notes.txt whale
//! ```
//!
//! ## Modules
//!
//! - `analyzer` - Text statistics extraction (sentences, characters, words, frequency)
//! - `app` - Logging setup, application configuration and fatal error handling
//! - `cli` - Argument parsing, command implementations and report formatting
//! - `config` - Configuration file and environment handling
//! - `error` - Error types shared by the library and the binary
pub mod analyzer;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
