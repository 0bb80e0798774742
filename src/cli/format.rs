//! Output formatting functions for analysis reports
//!
//! Every report has a human-readable rendering and a JSON rendering; all
//! functions here are pure and return the text to print.

use crate::analyzer::{FrequencyTable, Statistics, WordCount};
use crate::config::OutputFormat;
use crate::error::Result;
use serde::Serialize;
use std::path::Path;

const SEPARATOR_WIDTH: usize = 60;

fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Result of looking up one term
#[derive(Debug, Serialize)]
pub struct SearchReport<'a> {
    pub file: &'a Path,
    pub term: String,
    pub count: Option<usize>,
}

/// Word frequency listing, optionally limited to the top `limit` words
#[derive(Debug, Serialize)]
pub struct FrequencyReport<'a> {
    pub file: &'a Path,
    pub limit: Option<usize>,
    pub words: &'a [WordCount],
}

#[derive(Debug, Serialize)]
pub struct SummaryReport<'a> {
    pub file: &'a Path,
    pub statistics: Statistics,
    #[serde(skip)]
    pub description: String,
    pub top_words: &'a [WordCount],
}

#[derive(Debug, Serialize)]
pub struct CompareReport<'a> {
    pub first: &'a Path,
    pub second: &'a Path,
    pub first_sentences: usize,
    pub second_sentences: usize,
    pub equal: bool,
}

/// Render the first `n` entries of `table` the way the frequency report lists them
pub fn format_frequent_words(table: &FrequencyTable, n: Option<usize>) -> String {
    let mut output = match n {
        None => "All unique words & their counts:\n\n".to_string(),
        Some(n) => format!("The {} most frequent words in the text file are:\n\n", n),
    };

    for entry in table.top(n) {
        output.push_str(&format!("'{}': {}\n", entry.word, entry.count));
    }
    output
}

pub fn format_frequency_human(table: &FrequencyTable, n: Option<usize>) -> String {
    format!("{}\n\n{}", separator(), format_frequent_words(table, n))
}

pub fn format_search_human(report: &SearchReport<'_>) -> String {
    match report.count {
        Some(count) => format!(
            "{}\n\nFrequency of '{}': {}\n",
            separator(),
            report.term,
            count
        ),
        None => "Search term not found\n".to_string(),
    }
}

pub fn format_summary_human(report: &SummaryReport<'_>, table: &FrequencyTable, n: usize) -> String {
    format!(
        "{}\n{}\n\n{}",
        separator(),
        report.description,
        format_frequent_words(table, Some(n))
    )
}

pub fn format_compare_human(report: &CompareReport<'_>) -> String {
    let verdict = if report.equal { "the same" } else { "different" };
    format!(
        "'{}' has {} sentences and '{}' has {} sentences: {} sentence counts.\n",
        report.first.display(),
        report.first_sentences,
        report.second.display(),
        report.second_sentences,
        verdict
    )
}

/// Closing line printed after every successful analysis
pub fn format_completion(file: &Path) -> String {
    format!("\nAnalysis completed for '{}'.\n", file.display())
}

/// Serialize a report as pretty JSON
pub fn format_json<T: Serialize>(report: &T) -> Result<String> {
    let mut output = serde_json::to_string_pretty(report)?;
    output.push('\n');
    Ok(output)
}

/// Pick the rendering for `format`
pub fn render<T, F>(format: OutputFormat, report: &T, human: F) -> Result<String>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Text => Ok(human(report)),
        OutputFormat::Json => format_json(report),
    }
}
