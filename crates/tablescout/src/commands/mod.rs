pub mod demo;
pub mod export;
pub mod interactive;
pub mod search;
pub mod stats;
pub mod version;

use std::path::Path;

use tablescout_catalog::{build_index, load_jsonl, sample_tables};
use tablescout_core::{SearchConfig, TableRecord};
use tablescout_index::SearchIndex;

/// Records from a JSONL catalogue, or the built-in sample catalogue
pub fn load_records(catalog: Option<&Path>) -> anyhow::Result<Vec<TableRecord>> {
    match catalog {
        Some(path) => Ok(load_jsonl(path)?),
        None => {
            tracing::info!("no catalogue given, using built-in sample tables");
            Ok(sample_tables())
        }
    }
}

pub fn load_index(catalog: Option<&Path>) -> anyhow::Result<SearchIndex> {
    let records = load_records(catalog)?;
    Ok(build_index(records, SearchConfig::default()))
}
