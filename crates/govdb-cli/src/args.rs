use clap::{Parser, Subcommand, ValueEnum};
use govdb_core::prelude::{FieldFilter, SortDirection};

/// CLI arguments for govdb
#[derive(Debug, Parser)]
#[command(
    name = "govdb",
    version,
    about = "CLI for filtering, sorting and exporting the AI-governance policy dataset"
)]
pub struct CliArgs {
    /// Path to the input dataset (.json, or .json.gz with the `compact` feature)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Optional comma-separated list of country ids to load (e.g. eu,us,cn)
    #[arg(short = 'f', long = "filter", global = true)]
    pub filter: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset contents
    Stats,

    /// List all countries
    Countries,

    /// Show the full profile of one country
    Country {
        /// Country id (e.g. eu, US)
        id: String,
    },

    /// Filter, sort and export records
    Query(QueryArgs),
}

#[derive(Debug, clap::Args)]
pub struct QueryArgs {
    /// Case- and accent-insensitive substring of the country name
    #[arg(short, long)]
    pub search: Option<String>,

    /// Country id or part of its name
    #[arg(long)]
    pub country: Option<String>,

    /// Region label, or "all"
    #[arg(short, long)]
    pub region: Option<String>,

    /// Regulatory approach label, or "all"
    #[arg(short, long)]
    pub approach: Option<String>,

    /// Field filter `path<op>value`, repeatable (e.g. "score.overall>=80")
    #[arg(short = 'w', long = "where")]
    pub filters: Vec<FieldFilter>,

    /// Dotted field path to sort by (e.g. score.innovation)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction: asc or desc
    #[arg(long)]
    pub order: Option<SortDirection>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Column set for csv output
    #[arg(long, value_enum, default_value_t = ColumnSet::Comparison)]
    pub columns: ColumnSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColumnSet {
    /// The seven comparison-table columns
    Comparison,
    /// Every scalar field, headed by its path
    Full,
}
