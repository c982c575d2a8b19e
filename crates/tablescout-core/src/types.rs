//! Catalogue record and search result types

use serde::{Deserialize, Serialize};

/// One column of a catalogued table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Table metadata record, the unit of indexing and ranking
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRecord {
    pub dataset: String,
    pub table_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// `YYYY-MM-DD`, kept as written by the catalogue
    #[serde(default)]
    pub last_modified: String,
    #[serde(default)]
    pub row_count: u64,
}

impl TableRecord {
    /// `dataset.table_name`
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.dataset, self.table_name)
    }

    /// The five independently indexed text segments, in indexing order:
    /// name, description, column names, column descriptions, tags.
    pub fn text_segments(&self) -> [String; 5] {
        [
            self.table_name.clone(),
            self.description.clone(),
            self.columns
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            self.columns
                .iter()
                .map(|c| c.description.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            self.tags.join(" "),
        ]
    }

    /// All segments joined by single spaces
    pub fn composite_text(&self) -> String {
        self.text_segments().join(" ")
    }
}

/// A ranked search hit, recomputed on every query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTable {
    /// Position of the record in the index
    pub index: usize,
    pub full_name: String,
    pub dataset: String,
    pub table_name: String,
    pub description: String,
    pub column_count: usize,
    pub tags: Vec<String>,
    pub last_modified: String,
    pub row_count: u64,
    pub score: f64,
    /// Query keywords found in the lowercased name or description
    pub matched_keywords: Vec<String>,
}

impl ScoredTable {
    pub fn from_record(
        index: usize,
        record: &TableRecord,
        score: f64,
        matched_keywords: Vec<String>,
    ) -> Self {
        Self {
            index,
            full_name: record.full_name(),
            dataset: record.dataset.clone(),
            table_name: record.table_name.clone(),
            description: record.description.clone(),
            column_count: record.columns.len(),
            tags: record.tags.clone(),
            last_modified: record.last_modified.clone(),
            row_count: record.row_count,
            score,
            matched_keywords,
        }
    }

    /// Score rounded to four decimals, for display
    pub fn display_score(&self) -> f64 {
        (self.score * 10_000.0).round() / 10_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TableRecord {
        TableRecord {
            dataset: "sales".to_string(),
            table_name: "daily_sales_summary".to_string(),
            description: "Daily sales summary with revenue".to_string(),
            columns: vec![
                ColumnInfo::new("date", "Sales date"),
                ColumnInfo::new("revenue", "Total revenue"),
            ],
            tags: vec!["sales".to_string(), "daily".to_string()],
            last_modified: "2024-01-14".to_string(),
            row_count: 30000,
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample().full_name(), "sales.daily_sales_summary");
    }

    #[test]
    fn test_text_segments_order() {
        let segments = sample().text_segments();
        assert_eq!(segments[0], "daily_sales_summary");
        assert_eq!(segments[1], "Daily sales summary with revenue");
        assert_eq!(segments[2], "date revenue");
        assert_eq!(segments[3], "Sales date Total revenue");
        assert_eq!(segments[4], "sales daily");
    }

    #[test]
    fn test_composite_text_without_columns() {
        let record = TableRecord {
            table_name: "t".to_string(),
            description: "d".to_string(),
            ..Default::default()
        };
        // Empty segments still contribute their separators
        assert_eq!(record.composite_text(), "t d   ");
    }

    #[test]
    fn test_record_defaults_on_deserialize() {
        let json = r#"{"dataset":"finance","table_name":"budget_planning"}"#;
        let parsed: TableRecord = serde_json::from_str(json).unwrap();
        assert!(parsed.columns.is_empty());
        assert!(parsed.tags.is_empty());
        assert_eq!(parsed.row_count, 0);
    }

    #[test]
    fn test_display_score_rounds() {
        let hit = ScoredTable::from_record(0, &sample(), 0.123456, vec![]);
        assert_eq!(hit.display_score(), 0.1235);
        assert_eq!(hit.column_count, 2);
    }
}
