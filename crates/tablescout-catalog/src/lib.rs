//! Catalogue sources, result filters and enrichment around the search index

mod enrich;
mod error;
mod filters;
mod io;
mod sample;

pub use enrich::{data_freshness, enrich, related_tables, usage_recommendation, EnrichedTable};
pub use error::{CatalogError, Result};
pub use filters::{apply_filters, SearchFilters};
pub use io::{load_jsonl, write_jsonl};
pub use sample::{sample_tables, DEMO_QUERIES};

use tablescout_core::{SearchConfig, TableRecord};
use tablescout_index::SearchIndex;
use tracing::info;

/// Index `records` in order with `config`
pub fn build_index(records: Vec<TableRecord>, config: SearchConfig) -> SearchIndex {
    let mut index = SearchIndex::with_config(config);
    index.extend(records);

    let stats = index.stats();
    info!(
        tables = stats.records,
        keywords = stats.vocabulary,
        postings = stats.postings_entries,
        "search index built"
    );
    index
}
