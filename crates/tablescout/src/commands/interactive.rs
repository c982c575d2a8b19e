use std::io::{BufRead, Write};
use std::path::Path;

use tablescout_catalog::SearchFilters;
use tablescout_index::SearchIndex;

use super::search::{render_results, search_enriched};

const QUIT_WORDS: &[&str] = &["quit", "exit", "q"];

pub fn run(limit: usize, catalog: Option<&Path>) -> anyhow::Result<()> {
    let index = super::load_index(catalog)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let served = query_loop(&index, limit, stdin.lock(), stdout.lock())?;
    tracing::info!(queries = served, "interactive session ended");
    Ok(())
}

/// Answer one query per input line until a quit word or EOF.
/// Returns the number of queries answered.
pub fn query_loop<R: BufRead, W: Write>(
    index: &SearchIndex,
    limit: usize,
    reader: R,
    mut writer: W,
) -> anyhow::Result<usize> {
    let filters = SearchFilters::default();
    let mut served = 0;

    writeln!(
        writer,
        "Enter your queries (type 'quit' to exit), {} tables loaded",
        index.len()
    )?;

    for line in reader.lines() {
        let line = line?;
        let query = line.trim();
        if QUIT_WORDS.contains(&query.to_lowercase().as_str()) {
            break;
        }
        if query.is_empty() {
            continue;
        }

        let results = search_enriched(index, query, limit, &filters);
        if !results.is_empty() {
            writeln!(writer, "\nFound {} relevant tables:\n", results.len())?;
        }
        write!(writer, "{}", render_results(&results))?;
        writer.flush()?;
        served += 1;
    }

    Ok(served)
}
