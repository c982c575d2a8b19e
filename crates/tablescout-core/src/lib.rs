//! Core catalogue types and search configuration

mod config;
mod types;

pub use config::{DocumentFrequency, SearchConfig, StopWords};
pub use types::{ColumnInfo, ScoredTable, TableRecord};
