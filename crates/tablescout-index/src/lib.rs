//! Inverted index and TF-IDF ranking for table metadata

mod index;
mod postings;
mod tfidf;
mod tokenizer;

pub use index::{IndexStats, SearchIndex};
pub use postings::Postings;
pub use tfidf::{keyword_match_score, tfidf_score};
pub use tokenizer::{extract_keywords, Tokenizer};
