use std::path::Path;

use tablescout_catalog::{SearchFilters, DEMO_QUERIES};

use super::search::{render_results, search_enriched};

pub fn run(catalog: Option<&Path>) -> anyhow::Result<()> {
    let index = super::load_index(catalog)?;

    println!("Table metadata search ({} tables)", index.len());
    println!("{}", "=".repeat(50));

    let filters = SearchFilters::default();
    for query in DEMO_QUERIES {
        println!("\nQuery: '{query}'");
        println!("{}", "-".repeat(30));
        let results = search_enriched(&index, query, index.config().default_limit, &filters);
        print!("{}", render_results(&results));
    }
    Ok(())
}
