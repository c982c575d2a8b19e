//! Append-only inverted index from keyword to record positions

use std::collections::{HashMap, HashSet};
use tablescout_core::DocumentFrequency;

#[derive(Debug, Clone, Default)]
pub struct Postings {
    lists: HashMap<String, Vec<usize>>,
    entries: usize,
}

impl Postings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `keyword` in record `index`
    pub fn append(&mut self, keyword: &str, index: usize) {
        match self.lists.get_mut(keyword) {
            Some(list) => list.push(index),
            None => {
                self.lists.insert(keyword.to_string(), vec![index]);
            }
        }
        self.entries += 1;
    }

    /// Postings list for `keyword`, empty if never indexed
    pub fn get(&self, keyword: &str) -> &[usize] {
        self.lists.get(keyword).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn document_frequency(&self, keyword: &str, mode: DocumentFrequency) -> usize {
        let list = self.get(keyword);
        match mode {
            DocumentFrequency::Postings => list.len(),
            DocumentFrequency::DistinctRecords => list.iter().collect::<HashSet<_>>().len(),
        }
    }

    /// Number of distinct keywords
    pub fn vocabulary_len(&self) -> usize {
        self.lists.len()
    }

    /// Total number of entries across all lists
    pub fn total_entries(&self) -> usize {
        self.entries
    }

    /// Largest record position referenced, if any
    pub fn max_index(&self) -> Option<usize> {
        self.lists.values().flat_map(|l| l.iter().copied()).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_duplicates() {
        let mut postings = Postings::new();
        postings.append("daily", 0);
        postings.append("daily", 0);
        postings.append("daily", 1);
        postings.append("sales", 1);

        assert_eq!(postings.get("daily"), &[0, 0, 1]);
        assert_eq!(postings.get("missing"), &[] as &[usize]);
        assert_eq!(postings.vocabulary_len(), 2);
        assert_eq!(postings.total_entries(), 4);
        assert_eq!(postings.max_index(), Some(1));
    }

    #[test]
    fn test_document_frequency_modes() {
        let mut postings = Postings::new();
        for index in [0, 0, 0, 2] {
            postings.append("daily", index);
        }

        assert_eq!(
            postings.document_frequency("daily", DocumentFrequency::Postings),
            4
        );
        assert_eq!(
            postings.document_frequency("daily", DocumentFrequency::DistinctRecords),
            2
        );
        assert_eq!(
            postings.document_frequency("none", DocumentFrequency::Postings),
            0
        );
    }
}
