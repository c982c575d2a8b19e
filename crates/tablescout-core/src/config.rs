//! Configuration for keyword extraction and ranking

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "were", "will", "with", "where", "can", "find",
    "i",
];

/// Words dropped by the tokenizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self {
        Self::from_words(DEFAULT_STOP_WORDS.iter().copied())
    }

    /// Build a custom set. Words are lowercased since tokens always are.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// No filtering at all
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new()
    }
}

/// How the IDF denominator is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFrequency {
    /// Length of the postings list: one entry per keyword occurrence per
    /// text segment, so a record can count more than once.
    #[default]
    Postings,
    /// Number of distinct records in the postings list
    DistinctRecords,
}

/// Search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Tokenizer stop words
    pub stop_words: StopWords,

    /// Tokens must be at least this long
    pub min_token_len: usize,

    /// Result count used by `search_default`
    pub default_limit: usize,

    /// Weight of the TF-IDF term in the combined score
    pub tfidf_weight: f64,

    /// Weight of the substring keyword-match term
    pub keyword_weight: f64,

    /// IDF denominator semantics
    pub document_frequency: DocumentFrequency,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self {
            stop_words: StopWords::new(),
            min_token_len: 3,
            default_limit: 10,
            tfidf_weight: 0.6,
            keyword_weight: 0.4,
            document_frequency: DocumentFrequency::Postings,
        }
    }

    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn with_document_frequency(mut self, mode: DocumentFrequency) -> Self {
        self.document_frequency = mode;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
