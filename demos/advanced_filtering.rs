//! Advanced filtering example for govdb-rs
//!
//! Field filters, accent-insensitive search, sorting by text and booleans,
//! and the full export.

use govdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== govdb-rs Advanced Filtering Example ===\n");

    let db = GovDb::load()?;

    // Example 1: Field filters share the sort comparator
    println!("--- Example 1: Overall score >= 80 with active enforcement ---");
    let criteria = Criteria::new()
        .filter("score.overall>=80".parse()?)
        .filter("policy.enforcement.active=true".parse()?)
        .sort_by(SortSpec::default());
    for country in db.query(&criteria)? {
        println!("- {} ({})", country.name(), country.overall_score());
    }
    println!();

    // Example 2: Search ignores case and accents
    println!("--- Example 2: Search 'TURKIYE' ---");
    for country in db.query(&Criteria::new().search("TURKIYE"))? {
        println!("- {}", country.name());
    }
    println!();

    // Example 3: "all" imposes no constraint; other labels match exactly
    println!("--- Example 3: region=all vs. region=Atlantis ---");
    let all = db.query(&Criteria::new().region(ALL))?;
    let unknown = db.query(&Criteria::new().region("Atlantis"))?;
    println!("all: {} countries, Atlantis: {} countries", all.len(), unknown.len());
    println!();

    // Example 4: Text sort uses collation order
    println!("--- Example 4: European entries by name ---");
    let by_name = Criteria::new()
        .region("Europe")
        .sort_by(SortSpec::ascending("name")?);
    for country in db.query(&by_name)? {
        println!("- {}", country.name());
    }
    println!();

    // Example 5: Toggle the sort direction, like clicking a column header twice
    println!("--- Example 5: Innovation score, both directions ---");
    let mut spec = SortSpec::ascending("score.innovation")?;
    for _ in 0..2 {
        let rows = db.query(&Criteria::new().region("Asia").sort_by(spec.clone()))?;
        let names: Vec<&str> = rows.iter().map(|c| c.name()).collect();
        println!("{}: {}", spec.direction, names.join(", "));
        spec.toggle_direction();
    }
    println!();

    // Example 6: Group by approach
    println!("--- Example 6: Countries grouped by approach ---");
    for approach in Approach::KNOWN {
        let rows = db.query(&Criteria::new().approach(approach.as_str()))?;
        println!("{}: {} countries", approach, rows.len());
    }
    println!();

    // Example 7: Full export, every scalar field
    println!("--- Example 7: Full CSV export for the Middle East ---");
    let rows = db.query(&Criteria::new().region("Middle East"))?;
    print!("{}", to_delimited_text(&rows, FULL_COLUMNS)?);

    println!("\n=== Example completed successfully ===");
    Ok(())
}
