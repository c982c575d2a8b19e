#![allow(dead_code)]

use tablescout_catalog::sample_tables;
use tablescout_core::TableRecord;
use tablescout_index::SearchIndex;

pub fn table(dataset: &str, name: &str, description: &str, tags: &[&str]) -> TableRecord {
    TableRecord {
        dataset: dataset.to_string(),
        table_name: name.to_string(),
        description: description.to_string(),
        columns: Vec::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        last_modified: "2024-01-15".to_string(),
        row_count: 1000,
    }
}

pub fn sample_index() -> SearchIndex {
    let mut index = SearchIndex::new();
    index.extend(sample_tables());
    index
}

pub fn assert_ranked(results: &[tablescout_core::ScoredTable], limit: usize) {
    assert!(results.len() <= limit, "{} results over limit {}", results.len(), limit);
    for r in results {
        assert!(r.score > 0.0, "{} has non-positive score {}", r.full_name, r.score);
    }
    for pair in results.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "{} ({}) ranked above {} ({})",
            pair[0].full_name,
            pair[0].score,
            pair[1].full_name,
            pair[1].score
        );
    }
}
