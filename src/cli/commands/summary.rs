//! Summary command: headline statistics plus the most frequent words

use crate::analyzer::TextAnalyzer;
use crate::cli::format::{format_completion, format_summary_human, render, SummaryReport};
use crate::config::OutputFormat;
use crate::error::Result;
use std::path::Path;
use tracing::debug;

pub fn run_summary_command(file: &Path, top_words: usize, format: OutputFormat) -> Result<String> {
    let mut analyzer = TextAnalyzer::open(file)?;
    let statistics = analyzer.analyze();
    debug!("Statistics for {}: {:?}", file.display(), statistics);

    let table = analyzer.frequency_table();
    let report = SummaryReport {
        file,
        statistics,
        description: analyzer.describe(),
        top_words: table.top(Some(top_words)),
    };

    let mut output = render(format, &report, |report| {
        format_summary_human(report, &table, top_words)
    })?;
    if format == OutputFormat::Text {
        output.push_str(&format_completion(file));
    }
    Ok(output)
}
