mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use commands::search::SearchArgs;
use tablescout_catalog::SearchFilters;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level: tracing::Level = cli.log_level.parse()?;

    // stdout carries results, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search {
            query,
            limit,
            datasets,
            tags,
            min_score,
            json,
            source,
        } => commands::search::run(SearchArgs {
            query: &query,
            limit,
            filters: SearchFilters {
                datasets,
                tags,
                min_score,
            },
            json,
            catalog: source.catalog.as_deref(),
        }),
        Commands::Demo { source } => commands::demo::run(source.catalog.as_deref()),
        Commands::Interactive { limit, source } => {
            commands::interactive::run(limit, source.catalog.as_deref())
        }
        Commands::Stats { source } => commands::stats::run(source.catalog.as_deref()),
        Commands::Export { output, source } => {
            commands::export::run(&output, source.catalog.as_deref())
        }
        Commands::Version => commands::version::run(),
    }
}
