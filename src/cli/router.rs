//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::app::AppConfig;
use crate::cli::args::Commands;
use crate::cli::commands::*;
use anyhow::Result;
use std::io::Write;

/// Execute a CLI command and write its report to stdout
pub fn execute_command(command: Commands, config: &AppConfig) -> Result<()> {
    let output = dispatch(command, config)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Run `command` and return the rendered report
pub fn dispatch(command: Commands, config: &AppConfig) -> Result<String> {
    let format = config.settings.format;

    let output = match command {
        Commands::Search { file, term } => run_search_command(&file, &term, format)?,
        Commands::Frequency { file, top } => run_frequency_command(&file, top, format)?,
        Commands::Summary { file } => {
            run_summary_command(&file, config.settings.top_words, format)?
        }
        Commands::Compare { first, second } => run_compare_command(&first, &second, format)?,
    };
    Ok(output)
}
