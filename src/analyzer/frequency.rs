//! Unique word frequency

use super::words::WordSequence;
use serde::Serialize;
use std::collections::HashMap;

/// A word and how many times it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Occurrences per normalized word, ordered by descending count.
///
/// Words with equal counts keep the order in which they first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<WordCount>,
}

impl FrequencyTable {
    pub fn from_words(words: &WordSequence) -> Self {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<WordCount> = Vec::new();

        for word in words {
            match index.get(word.as_str()) {
                Some(&slot) => entries[slot].count += 1,
                None => {
                    index.insert(word.as_str(), entries.len());
                    entries.push(WordCount {
                        word: word.clone(),
                        count: 1,
                    });
                }
            }
        }

        // stable: ties stay in first-seen order
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    /// Count for an already-normalized word
    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.word == word)
            .map(|entry| entry.count)
    }

    /// The `n` most frequent words, or every word when `n` is `None`
    pub fn top(&self, n: Option<usize>) -> &[WordCount] {
        let n = n.unwrap_or(self.entries.len()).min(self.entries.len());
        &self.entries[..n]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordCount> {
        self.entries.iter()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a WordCount;
    type IntoIter = std::slice::Iter<'a, WordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
