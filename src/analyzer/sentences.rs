//! Sentence counting
//!
//! Each line is split three separate times, once per terminator (`.`, `!`,
//! `?`), and every fragment that starts with an upper-case letter counts as
//! a sentence. A line whose successor also starts with an upper-case letter
//! has all of its fragments discounted again, so consecutive capitalized
//! lines undercount.

use super::document::Document;
use tracing::trace;

const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Count sentences in `document`
pub fn count_sentences(document: &Document) -> usize {
    let lines = document.lines();
    let mut count = 0;

    for (index, line) in lines.iter().enumerate() {
        let fragments = capitalized_fragments(line);
        if fragments == 0 {
            continue;
        }

        let cancelled = lines
            .get(index + 1)
            .is_some_and(|next| starts_capitalized(next));

        if cancelled {
            trace!(
                "Line {} discounts {} fragment(s): next line starts capitalized",
                index + 1,
                fragments
            );
        } else {
            count += fragments;
        }
    }

    count
}

/// Number of fragments on `line` that open a sentence, summed over all three
/// terminator splits
pub fn capitalized_fragments(line: &str) -> usize {
    TERMINATORS
        .iter()
        .flat_map(|terminator| line.split(*terminator))
        .filter(|fragment| starts_capitalized(fragment))
        .count()
}

/// Non-blank and the very first character (before any trimming) is upper-case
fn starts_capitalized(text: &str) -> bool {
    !text.trim().is_empty() && text.chars().next().is_some_and(char::is_uppercase)
}
