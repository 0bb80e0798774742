//! Word normalization and the flattened word sequence

use super::document::Document;

/// Characters removed from every token before it is counted
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Token separator: Unicode whitespace plus the ASCII information
/// separators U+001C..=U+001F
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Strip [`PUNCTUATION`] from a token and upper-case what remains.
///
/// A token made only of punctuation normalizes to an empty string.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !PUNCTUATION.contains(*c))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Normalized words of a document in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSequence {
    words: Vec<String>,
}

impl WordSequence {
    /// Split every line on [`is_separator`] runs and normalize each token.
    ///
    /// Tokens that normalize to `""` are kept so that the sequence length
    /// always equals the token count.
    pub fn from_document(document: &Document) -> Self {
        let words = document
            .lines()
            .iter()
            .flat_map(|line| line.split(is_separator).filter(|token| !token.is_empty()))
            .map(normalize)
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Total length of all normalized words, in characters
    pub fn character_count(&self) -> usize {
        self.words.iter().map(|w| w.chars().count()).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

impl<S: Into<String>> FromIterator<S> for WordSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WordSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
