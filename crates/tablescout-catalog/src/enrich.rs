//! Result enrichment: usage hints, freshness, related tables

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use tablescout_core::ScoredTable;
use tablescout_index::SearchIndex;

const MAX_RELATED: usize = 3;
const MIN_SHARED_TAGS: usize = 2;

/// A ranked result with catalogue context attached
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedTable {
    #[serde(flatten)]
    pub result: ScoredTable,
    pub usage_recommendation: String,
    pub data_freshness: String,
    pub related_tables: Vec<String>,
}

pub fn enrich(
    index: &SearchIndex,
    results: Vec<ScoredTable>,
    today: NaiveDate,
) -> Vec<EnrichedTable> {
    results
        .into_iter()
        .map(|result| EnrichedTable {
            usage_recommendation: usage_recommendation(&result).to_string(),
            data_freshness: data_freshness(&result.last_modified, today),
            related_tables: related_tables(index, &result),
            result,
        })
        .collect()
}

pub fn usage_recommendation(result: &ScoredTable) -> &'static str {
    let has_tag = |tag: &str| result.tags.iter().any(|t| t == tag);

    if has_tag("daily") && result.row_count > 10_000 {
        "High-volume daily data - suitable for trend analysis"
    } else if has_tag("campaign") {
        "Marketing campaign data - good for performance analysis"
    } else if result.row_count < 1_000 {
        "Small reference table - suitable for lookup operations"
    } else {
        "General purpose table - verify data recency before use"
    }
}

/// Age bucket of a `YYYY-MM-DD` date relative to `today`
pub fn data_freshness(last_modified: &str, today: NaiveDate) -> String {
    let Ok(modified) = NaiveDate::parse_from_str(last_modified.trim(), "%Y-%m-%d") else {
        return "Unknown".to_string();
    };

    let days_old = (today - modified).num_days();
    if days_old <= 1 {
        "Very Fresh (< 1 day)".to_string()
    } else if days_old <= 7 {
        "Fresh (< 1 week)".to_string()
    } else if days_old <= 30 {
        "Recent (< 1 month)".to_string()
    } else {
        format!("Older ({days_old} days)")
    }
}

/// Up to three other records sharing two or more tags or the same dataset,
/// in index order
pub fn related_tables(index: &SearchIndex, result: &ScoredTable) -> Vec<String> {
    let tags: HashSet<&str> = result.tags.iter().map(String::as_str).collect();

    index
        .records()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != result.index)
        .filter(|(_, record)| {
            let shared = record
                .tags
                .iter()
                .map(String::as_str)
                .collect::<HashSet<_>>()
                .intersection(&tags)
                .count();
            shared >= MIN_SHARED_TAGS || record.dataset == result.dataset
        })
        .map(|(_, record)| record.full_name())
        .take(MAX_RELATED)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_tables;
    use tablescout_core::TableRecord;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample_index() -> SearchIndex {
        let mut index = SearchIndex::new();
        index.extend(sample_tables());
        index
    }

    #[test]
    fn test_freshness_buckets() {
        let today = date("2024-02-01");
        assert_eq!(data_freshness("2024-02-01", today), "Very Fresh (< 1 day)");
        assert_eq!(data_freshness("2024-01-31", today), "Very Fresh (< 1 day)");
        assert_eq!(data_freshness("2024-01-27", today), "Fresh (< 1 week)");
        assert_eq!(data_freshness("2024-01-10", today), "Recent (< 1 month)");
        assert_eq!(data_freshness("2023-12-01", today), "Older (62 days)");
        assert_eq!(data_freshness("", today), "Unknown");
        assert_eq!(data_freshness("15/01/2024", today), "Unknown");
    }

    #[test]
    fn test_usage_recommendation() {
        let record = TableRecord {
            tags: vec!["daily".to_string()],
            row_count: 50_000,
            ..Default::default()
        };
        let mut hit = ScoredTable::from_record(0, &record, 1.0, vec![]);
        assert!(usage_recommendation(&hit).starts_with("High-volume daily"));

        hit.row_count = 5_000;
        assert!(usage_recommendation(&hit).starts_with("General purpose"));

        hit.tags = vec!["campaign".to_string()];
        assert!(usage_recommendation(&hit).starts_with("Marketing campaign"));

        hit.tags.clear();
        hit.row_count = 10;
        assert!(usage_recommendation(&hit).starts_with("Small reference"));
    }

    #[test]
    fn test_related_tables_by_dataset_and_tags() {
        let index = sample_index();
        let results = index.search("budget planning", 10);
        let finance = results
            .iter()
            .find(|r| r.full_name == "finance.budget_planning")
            .unwrap();

        // shares "planning" and "budget" with the campaign planning table
        let related = related_tables(&index, finance);
        assert_eq!(related, vec!["marketing.campaign_planning_data"]);
    }

    #[test]
    fn test_related_tables_capped_and_skip_self() {
        let index = sample_index();
        let results = index.search("campaign metadata", 10);
        let metadata = results
            .iter()
            .find(|r| r.full_name == "marketing.campaign_metadata")
            .unwrap();

        let related = related_tables(&index, metadata);
        assert_eq!(related.len(), 3);
        assert!(!related.contains(&"marketing.campaign_metadata".to_string()));
        assert_eq!(related[0], "marketing.daily_campaign_performance");
    }

    #[test]
    fn test_enrich_keeps_rank_order() {
        let index = sample_index();
        let results = index.search("daily sales revenue", 5);
        let names: Vec<_> = results.iter().map(|r| r.full_name.clone()).collect();

        let enriched = enrich(&index, results, date("2024-01-15"));
        let enriched_names: Vec<_> = enriched.iter().map(|e| e.result.full_name.clone()).collect();
        assert_eq!(names, enriched_names);

        let json = serde_json::to_value(&enriched[0]).unwrap();
        assert!(json.get("score").is_some());
        assert!(json.get("related_tables").is_some());
    }
}
