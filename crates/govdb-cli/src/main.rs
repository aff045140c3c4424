//! govdb — Command-line interface for govdb-core
//!
//! Inspect, filter and export the AI-governance policy dataset from your
//! terminal.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ govdb stats
//!
//! - List all countries (optionally restricted to a few ids)
//!   $ govdb countries
//!   $ govdb --filter=eu,us countries
//!
//! - Show one country's profile (id, case-insensitive)
//!   $ govdb country EU
//!
//! - Filter and sort, printing a table, JSON or CSV
//!   $ govdb query --region Asia --sort score.innovation --order desc
//!   $ govdb query --where "score.overall>=80" --format csv --columns full
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the dataset bundled with `govdb-core`. Use
//! `--input <path>` to point at another `.json` (or `.json.gz`) dataset.
//! Set `RUST_LOG=debug` to see pipeline counts on stderr.
mod args;

use crate::args::{CliArgs, ColumnSet, Commands, OutputFormat, QueryArgs};
use clap::Parser;
use govdb_core::prelude::*;
use govdb_core::sort::DEFAULT_SORT_FIELD;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = CliArgs::parse();

    // Parse filter if provided
    let id_filter: Option<Vec<&str>> = args.filter.as_ref().map(|s| {
        s.split(',')
            .map(|x| x.trim())
            .filter(|x| !x.is_empty())
            .collect()
    });

    let db = match &args.input {
        Some(path) => GovDb::load_from_path(path, id_filter.as_deref())?,
        None => {
            let dir = GovDb::default_data_dir();
            let file = GovDb::default_dataset_filename();
            GovDb::load_from_path(dir.join(file), id_filter.as_deref())?
        }
    };

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Dataset statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Regions: {}", stats.regions);
            println!("  Approaches: {}", stats.approaches);
            println!("  Active enforcement: {}", stats.active_enforcement);
        }

        Commands::Countries => {
            for c in db.countries() {
                println!("{} ({})", c.name(), c.id());
            }
        }

        Commands::Country { id } => match db.find_country_by_id(&id) {
            Some(c) => {
                println!("Country: {} {}", c.flag, c.name());
                println!("Id: {}", c.id());
                println!("Region: {}", c.region());
                println!("Approach: {}", c.approach());
                println!("Key policy: {} ({})", c.policy.key, c.policy.status);
                println!("Philosophy: {}", c.policy.philosophy);
                println!(
                    "Enforcement: {} (active: {})",
                    c.policy.enforcement.penalties, c.policy.enforcement.active
                );
                println!(
                    "Investment: {} ({})",
                    c.investment.total, c.investment.infrastructure
                );
                println!(
                    "Score: overall {}, regulatory readiness {}, innovation {}",
                    c.score.overall, c.score.regulatory_readiness, c.score.innovation
                );
            }
            None => {
                eprintln!("No country found for: {id}");
            }
        },

        Commands::Query(query_args) => run_query(&db, query_args)?,
    }

    Ok(())
}

fn run_query(db: &GovDb, args: QueryArgs) -> anyhow::Result<()> {
    let mut criteria = Criteria::new();
    criteria.search_text = args.search;
    criteria.country = args.country;
    criteria.region = args.region;
    criteria.approach = args.approach;
    criteria.extra_filters = args.filters;

    if args.sort.is_some() || args.order.is_some() {
        let path = args.sort.as_deref().unwrap_or(DEFAULT_SORT_FIELD);
        criteria.sort = Some(SortSpec::new(path, args.order.unwrap_or_default())?);
    }

    let rows = db.query(&criteria)?;

    match args.format {
        OutputFormat::Table => {
            for c in &rows {
                println!(
                    "{:<4} {:<24} {:<12} {:<17} {:>6}",
                    c.id(),
                    c.name(),
                    c.region().as_str(),
                    c.approach().as_str(),
                    c.overall_score()
                );
            }
            println!("{} of {} countries", rows.len(), db.country_count());
        }
        OutputFormat::Json => println!("{}", to_json_pretty(&rows)?),
        OutputFormat::Csv => {
            let columns = match args.columns {
                ColumnSet::Comparison => COMPARISON_COLUMNS,
                ColumnSet::Full => FULL_COLUMNS,
            };
            print!("{}", to_delimited_text(&rows, columns)?);
        }
    }

    Ok(())
}
