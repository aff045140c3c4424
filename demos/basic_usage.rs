//! Basic usage example for govdb-rs
//!
//! This example demonstrates how to:
//! - Load the governance dataset
//! - Look up a country and read nested fields
//! - Run a filtered, sorted query
//! - Export the result as CSV

use govdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== govdb-rs Basic Usage Example ===\n");

    println!("Loading governance dataset...");
    let db = GovDb::load()?;
    println!("✓ Dataset loaded successfully\n");

    // Example 1: List all countries
    println!("--- Example 1: List all countries ---");
    for (i, country) in db.countries().iter().enumerate() {
        println!(
            "{}. {} {} ({})",
            i + 1,
            country.flag,
            country.name(),
            country.id()
        );
    }
    println!();

    // Example 2: Find a specific country
    println!("--- Example 2: Find country by id ---");
    if let Some(country) = db.find_country_by_id("EU") {
        println!("Found: {}", country.name());
        println!("Key policy: {}", country.policy.key);
        println!("Approach: {}", country.approach());
        println!("Overall score: {}", country.overall_score());
    }
    println!();

    // Example 3: Read a field by dotted path
    println!("--- Example 3: Dotted field paths ---");
    if let Some(country) = db.find_country_by_id("sg") {
        for path in ["score.innovation", "policy.enforcement.active", "investment.total"] {
            println!("{path} = {}", resolve_str(country, path)?);
        }
    }
    println!();

    // Example 4: Filter and sort
    println!("--- Example 4: Comprehensive approaches, best score first ---");
    let criteria = Criteria::new()
        .approach("comprehensive")
        .sort_by(SortSpec::default());
    for country in db.query(&criteria)? {
        println!("- {} ({})", country.name(), country.overall_score());
    }
    println!();

    // Example 5: Export the comparison table
    println!("--- Example 5: Comparison table as CSV ---");
    let rows = db.query(&Criteria::new().region("Europe"))?;
    print!("{}", to_delimited_text(&rows, COMPARISON_COLUMNS)?);
    println!();

    // Example 6: Dataset statistics
    println!("--- Example 6: Dataset statistics ---");
    let stats = db.stats();
    println!("Countries: {}", stats.countries);
    println!("Regions: {}", stats.regions);
    println!("Approaches: {}", stats.approaches);
    println!("Active enforcement: {}", stats.active_enforcement);

    println!("\n=== Example completed successfully ===");
    Ok(())
}
