//! Search command: frequency of a single term

use crate::analyzer::TextAnalyzer;
use crate::cli::format::{format_completion, format_search_human, render, SearchReport};
use crate::config::OutputFormat;
use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// Look up `term` in `file` and render the result
pub fn run_search_command(file: &Path, term: &str, format: OutputFormat) -> Result<String> {
    let mut analyzer = TextAnalyzer::open(file)?;
    analyzer.format_text();

    let term = term.to_uppercase();
    let count = analyzer.lookup(&term);
    debug!("Search for '{}' in {}: {:?}", term, file.display(), count);

    let report = SearchReport { file, term, count };
    let mut output = render(format, &report, format_search_human)?;
    if format == OutputFormat::Text {
        output.push_str(&format_completion(file));
    }
    Ok(output)
}
