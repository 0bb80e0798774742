//! Compare command: sentence-count equality of two files

use crate::analyzer::TextAnalyzer;
use crate::cli::format::{format_compare_human, format_completion, render, CompareReport};
use crate::config::OutputFormat;
use crate::error::Result;
use std::path::Path;

pub fn run_compare_command(first: &Path, second: &Path, format: OutputFormat) -> Result<String> {
    let mut left = TextAnalyzer::open(first)?;
    let mut right = TextAnalyzer::open(second)?;
    left.count_sentences();
    right.count_sentences();

    let report = CompareReport {
        first,
        second,
        first_sentences: left.sentence_count(),
        second_sentences: right.sentence_count(),
        equal: left.equals(&right),
    };
    let mut output = render(format, &report, format_compare_human)?;
    if format == OutputFormat::Text {
        output.push_str(&format_completion(first));
        output.push_str(&format_completion(second));
    }
    Ok(output)
}
