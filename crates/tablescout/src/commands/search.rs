use std::fmt::Write as _;
use std::path::Path;

use tablescout_catalog::{apply_filters, enrich, EnrichedTable, SearchFilters};
use tablescout_index::SearchIndex;

pub struct SearchArgs<'a> {
    pub query: &'a str,
    pub limit: usize,
    pub filters: SearchFilters,
    pub json: bool,
    pub catalog: Option<&'a Path>,
}

pub fn run(args: SearchArgs<'_>) -> anyhow::Result<()> {
    let index = super::load_index(args.catalog)?;
    let results = search_enriched(&index, args.query, args.limit, &args.filters);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", render_results(&results));
    }
    Ok(())
}

/// Rank, filter, then enrich against today's date
pub fn search_enriched(
    index: &SearchIndex,
    query: &str,
    limit: usize,
    filters: &SearchFilters,
) -> Vec<EnrichedTable> {
    let results = apply_filters(index.search(query, limit), filters);
    let today = chrono::Local::now().date_naive();
    enrich(index, results, today)
}

pub fn render_results(results: &[EnrichedTable]) -> String {
    if results.is_empty() {
        return "No relevant tables found.\n".to_string();
    }

    let mut out = String::new();
    for (i, table) in results.iter().enumerate() {
        let r = &table.result;
        let _ = writeln!(out, "{}. {}", i + 1, r.full_name);
        let _ = writeln!(out, "   Description: {}", r.description);
        let _ = writeln!(out, "   Relevance Score: {}", r.display_score());
        let _ = writeln!(
            out,
            "   Matched Keywords: {}",
            r.matched_keywords.join(", ")
        );
        let _ = writeln!(
            out,
            "   Rows: {} | Columns: {} | Last Modified: {} ({})",
            r.row_count, r.column_count, r.last_modified, table.data_freshness
        );
        let _ = writeln!(out, "   Tags: {}", r.tags.join(", "));
        let _ = writeln!(out, "   Usage: {}", table.usage_recommendation);
        if !table.related_tables.is_empty() {
            let _ = writeln!(out, "   Related: {}", table.related_tables.join(", "));
        }
        out.push('\n');
    }
    out
}
