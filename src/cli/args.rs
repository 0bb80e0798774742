//! CLI argument structures
//!
//! This module defines all command-line interface structures used by
//! text-analyzer. It includes the main CLI structure and all subcommand
//! definitions.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Analyze text files: sentence, character and word counts plus word frequency
#[derive(Parser, Debug)]
#[command(name = "text-analyzer")]
#[command(about = "text-analyzer - Summary statistics and word frequency for text files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Report format (overrides the configured format)
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for a term and report how often it occurs
    #[command(name = "search")]
    Search {
        /// Text file to analyze
        file: PathBuf,

        /// Term to look up (case-insensitive)
        term: String,
    },

    /// Perform word frequency analysis
    #[command(name = "frequency")]
    Frequency {
        /// Text file to analyze
        file: PathBuf,

        /// Number of top words to list (all words when omitted)
        #[arg(short = 'n', long)]
        top: Option<usize>,
    },

    /// Generate summary statistics
    #[command(name = "summary")]
    Summary {
        /// Text file to analyze
        file: PathBuf,
    },

    /// Check whether two files contain the same number of sentences
    #[command(name = "compare")]
    Compare {
        /// First text file
        first: PathBuf,

        /// Second text file
        second: PathBuf,
    },
}
