//! Text statistics extraction for line-oriented text files
//!
//! [`TextAnalyzer`] owns a loaded [`Document`] and derives every statistic
//! from it on demand:
//!
//! ```no_run
//! use text_analyzer::analyzer::TextAnalyzer;
//!
//! let mut analyzer = TextAnalyzer::open("notes.txt")?;
//! analyzer.format_text();
//! analyzer.count_sentences();
//! analyzer.count_characters();
//! analyzer.count_words();
//! println!("{}", analyzer.describe());
//! # Ok::<(), text_analyzer::error::Error>(())
//! ```
//!
//! Word-derived counts read the word sequence built by
//! [`TextAnalyzer::format_text`]; before that call they report zero.

pub mod document;
pub mod frequency;
pub mod sentences;
pub mod words;


use crate::error::Result;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::debug;

pub use document::Document;
pub use frequency::{FrequencyTable, WordCount};
pub use sentences::count_sentences;
pub use words::{normalize, WordSequence, PUNCTUATION};

/// Snapshot of the three headline counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub sentences: usize,
    pub characters: usize,
    pub words: usize,
}

/// Interprets a text document and keeps its most recent counts
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    document: Document,
    words: WordSequence,
    sentence_count: usize,
    total_characters: usize,
    total_words: usize,
}

impl TextAnalyzer {
    /// Load `path` and wrap it in a fresh analyzer
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Document::load(path)?))
    }

    pub fn new(document: Document) -> Self {
        Self {
            document,
            words: WordSequence::default(),
            sentence_count: 0,
            total_characters: 0,
            total_words: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Build the normalized word sequence from the document
    pub fn format_text(&mut self) -> &WordSequence {
        self.words = WordSequence::from_document(&self.document);
        debug!("Formatted {} words", self.words.len());
        &self.words
    }

    pub fn words(&self) -> &WordSequence {
        &self.words
    }

    /// Recount sentences from scratch
    pub fn count_sentences(&mut self) -> usize {
        self.sentence_count = sentences::count_sentences(&self.document);
        self.sentence_count
    }

    /// Recount characters across the normalized words
    pub fn count_characters(&mut self) -> usize {
        self.total_characters = self.words.character_count();
        self.total_characters
    }

    pub fn count_words(&mut self) -> usize {
        self.total_words = self.words.len();
        self.total_words
    }

    /// Run every counter and return the resulting snapshot
    pub fn analyze(&mut self) -> Statistics {
        self.format_text();
        self.count_sentences();
        self.count_characters();
        self.count_words();
        self.statistics()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    pub fn total_characters(&self) -> usize {
        self.total_characters
    }

    pub fn total_words(&self) -> usize {
        self.total_words
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            sentences: self.sentence_count,
            characters: self.total_characters,
            words: self.total_words,
        }
    }

    pub fn frequency_table(&self) -> FrequencyTable {
        FrequencyTable::from_words(&self.words)
    }

    /// Frequency of `term`, upper-cased before lookup
    pub fn lookup(&self, term: &str) -> Option<usize> {
        self.frequency_table().get(&term.to_uppercase())
    }

    /// Two analyzers are equal when their sentence counts match; nothing else
    /// is compared.
    pub fn equals(&self, other: &TextAnalyzer) -> bool {
        self.sentence_count() == other.sentence_count()
    }

    pub fn describe(&self) -> String {
        format!(
            "The text file contains a total of...\n\t{} sentences,\n\t{} characters,\n\t& {} words.",
            self.sentence_count(),
            self.total_characters(),
            self.total_words()
        )
    }
}

impl fmt::Display for TextAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
