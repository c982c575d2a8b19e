//! Keyword extraction

use regex::Regex;
use std::sync::OnceLock;
use tablescout_core::{SearchConfig, StopWords};

static WORD_RE: OnceLock<Regex> = OnceLock::new();

fn word_re() -> &'static Regex {
    WORD_RE.get_or_init(|| Regex::new(r"[A-Za-z]+").unwrap())
}

/// Splits text into lowercase keyword tokens.
///
/// A token is a maximal run of ASCII letters. Digits, underscores and
/// punctuation all separate tokens, so `daily_sales_summary` yields three.
/// Stop words and tokens shorter than `min_len` are dropped. Order and
/// duplicates are kept because term frequency counts them.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: StopWords,
    min_len: usize,
}

impl Tokenizer {
    pub fn new(stop_words: StopWords, min_len: usize) -> Self {
        Self {
            stop_words,
            min_len,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.stop_words.clone(), config.min_token_len)
    }

    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        word_re()
            .find_iter(text)
            .map(|m| m.as_str().to_ascii_lowercase())
            .filter(|word| word.len() >= self.min_len && !self.stop_words.contains(word))
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default())
    }
}

/// Tokenize with the default stop words and minimum length
pub fn extract_keywords(text: &str) -> Vec<String> {
    Tokenizer::default().extract_keywords(text)
}
