use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tablescout")]
#[command(version)]
#[command(about = "Free-text search over table metadata catalogues")]
pub struct Cli {
    /// Log level: error, warn, info, debug or trace
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where records come from
#[derive(Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    /// JSONL catalogue file (built-in sample catalogue if omitted)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank catalogue tables against a query
    Search {
        /// Free-text query
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Keep only results in these datasets
        #[arg(long = "dataset")]
        datasets: Vec<String>,

        /// Keep only results carrying one of these tags
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Drop results scoring below this
        #[arg(long)]
        min_score: Option<f64>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        source: CatalogArgs,
    },

    /// Run the demonstration queries
    Demo {
        #[command(flatten)]
        source: CatalogArgs,
    },

    /// Read queries from stdin until quit
    Interactive {
        /// Maximum number of results per query
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        #[command(flatten)]
        source: CatalogArgs,
    },

    /// Show index statistics
    Stats {
        #[command(flatten)]
        source: CatalogArgs,
    },

    /// Write the catalogue out as JSONL
    Export {
        /// Destination file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        source: CatalogArgs,
    },

    /// Print version information
    Version,
}
