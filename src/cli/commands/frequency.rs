//! Frequency command: unique words ranked by occurrence

use crate::analyzer::TextAnalyzer;
use crate::cli::format::{format_completion, format_frequency_human, render, FrequencyReport};
use crate::config::OutputFormat;
use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// List the `top` most frequent words of `file`, or all of them
pub fn run_frequency_command(
    file: &Path,
    top: Option<usize>,
    format: OutputFormat,
) -> Result<String> {
    let mut analyzer = TextAnalyzer::open(file)?;
    analyzer.format_text();

    let table = analyzer.frequency_table();
    debug!("{} unique words in {}", table.len(), file.display());

    let report = FrequencyReport {
        file,
        limit: top,
        words: table.top(top),
    };
    let mut output = render(format, &report, |_| format_frequency_human(&table, top))?;
    if format == OutputFormat::Text {
        output.push_str(&format_completion(file));
    }
    Ok(output)
}
