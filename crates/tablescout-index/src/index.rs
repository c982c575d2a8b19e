//! SearchIndex over an append-only record list

use crate::postings::Postings;
use crate::tfidf::{keyword_match_score, tfidf_score};
use crate::tokenizer::Tokenizer;
use serde::Serialize;
use tablescout_core::{ScoredTable, SearchConfig, TableRecord};
use tracing::debug;

/// Index size counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub records: usize,
    pub vocabulary: usize,
    pub postings_entries: usize,
}

/// Ranks table records against free-text queries.
///
/// Records are only ever appended; a record's position is its identity.
/// `search` takes `&self`, so a built index can be shared across threads
/// and queried without locking.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    config: SearchConfig,
    tokenizer: Tokenizer,
    records: Vec<TableRecord>,
    postings: Postings,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        let tokenizer = Tokenizer::from_config(&config);
        Self {
            config,
            tokenizer,
            records: Vec::new(),
            postings: Postings::new(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Append a record and index its text segments. Returns its position.
    pub fn add_table(&mut self, record: TableRecord) -> usize {
        let index = self.records.len();
        let mut added = 0;

        for segment in record.text_segments() {
            for keyword in self.tokenizer.extract_keywords(&segment) {
                self.postings.append(&keyword, index);
                added += 1;
            }
        }

        debug!(
            index,
            table = %record.full_name(),
            postings = added,
            "indexed table"
        );
        self.records.push(record);
        index
    }

    pub fn extend<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = TableRecord>,
    {
        for record in records {
            self.add_table(record);
        }
    }

    pub fn records(&self) -> &[TableRecord] {
        &self.records
    }

    pub fn record(&self, index: usize) -> Option<&TableRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Postings list for one keyword
    pub fn postings(&self, keyword: &str) -> &[usize] {
        self.postings.get(keyword)
    }

    /// The df value used by scoring under the configured mode
    pub fn document_frequency(&self, keyword: &str) -> usize {
        self.postings
            .document_frequency(keyword, self.config.document_frequency)
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            records: self.records.len(),
            vocabulary: self.postings.vocabulary_len(),
            postings_entries: self.postings.total_entries(),
        }
    }

    /// Search with the configured default limit
    pub fn search_default(&self, query: &str) -> Vec<ScoredTable> {
        self.search(query, self.config.default_limit)
    }

    /// Rank all records against `query`, best first.
    ///
    /// Only records scoring above zero are returned, at most `limit` of them.
    /// Equal scores keep insertion order.
    pub fn search(&self, query: &str, limit: usize) -> Vec<ScoredTable> {
        if limit == 0 || query.trim().is_empty() {
            return Vec::new();
        }

        let query_keywords = self.tokenizer.extract_keywords(query);
        if query_keywords.is_empty() {
            debug!(query, "query has no keywords");
            return Vec::new();
        }

        let mut results: Vec<ScoredTable> = self
            .records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let score = self.combined_score(&query_keywords, index);
                if score > 0.0 {
                    let matched = matched_keywords(&query_keywords, record);
                    Some(ScoredTable::from_record(index, record, score, matched))
                } else {
                    None
                }
            })
            .collect();

        // sort_by is stable, ties stay in insertion order
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let candidates = results.len();
        results.truncate(limit);

        debug!(
            query,
            keywords = query_keywords.len(),
            candidates,
            returned = results.len(),
            "search complete"
        );
        results
    }

    /// Weighted sum of the TF-IDF and keyword-match scores for one record.
    ///
    /// Panics if `index` is not a position handed out by `add_table`.
    pub fn combined_score(&self, query_keywords: &[String], index: usize) -> f64 {
        let record = &self.records[index];
        let text = record.composite_text();

        let record_keywords = self.tokenizer.extract_keywords(&text);
        let tfidf = tfidf_score(
            query_keywords,
            &record_keywords,
            &self.postings,
            self.records.len(),
            self.config.document_frequency,
        );
        let keyword = keyword_match_score(query_keywords, &text.to_lowercase());

        tfidf * self.config.tfidf_weight + keyword * self.config.keyword_weight
    }
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Query keywords present in the lowercased table name or description.
/// Columns and tags are not consulted.
fn matched_keywords(query_keywords: &[String], record: &TableRecord) -> Vec<String> {
    let name = record.table_name.to_lowercase();
    let description = record.description.to_lowercase();
    query_keywords
        .iter()
        .filter(|k| name.contains(k.as_str()) || description.contains(k.as_str()))
        .cloned()
        .collect()
}
