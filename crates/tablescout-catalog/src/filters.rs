//! Post-ranking result filters

use serde::{Deserialize, Serialize};
use tablescout_core::ScoredTable;

/// Narrowing applied after ranking. Empty fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Keep results whose full name contains any of these
    #[serde(default)]
    pub datasets: Vec<String>,
    /// Keep results carrying any of these tags
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub min_score: Option<f64>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty() && self.tags.is_empty() && self.min_score.is_none()
    }

    pub fn matches(&self, result: &ScoredTable) -> bool {
        if !self.datasets.is_empty()
            && !self
                .datasets
                .iter()
                .any(|ds| result.full_name.contains(ds.as_str()))
        {
            return false;
        }

        if let Some(min) = self.min_score {
            if result.score < min {
                return false;
            }
        }

        if !self.tags.is_empty() && !self.tags.iter().any(|tag| result.tags.contains(tag)) {
            return false;
        }

        true
    }
}

/// Drop results that fail `filters`, preserving rank order
pub fn apply_filters(results: Vec<ScoredTable>, filters: &SearchFilters) -> Vec<ScoredTable> {
    if filters.is_empty() {
        return results;
    }
    results.into_iter().filter(|r| filters.matches(r)).collect()
}
