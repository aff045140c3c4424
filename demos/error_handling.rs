//! Error handling example for govdb-rs
//!
//! This example demonstrates the error cases of the pipeline and loader.

use govdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== govdb-rs Error Handling Example ===\n");

    // Example 1: Handling dataset load errors
    println!("--- Example 1: Loading a missing dataset ---");
    match GovDb::load_from_path("does/not/exist.json", None) {
        Ok(db) => println!("  Unexpectedly loaded {} countries", db.country_count()),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    let db = GovDb::load()?;

    // Example 2: Unknown sort field fails the whole query
    println!("--- Example 2: Sorting by a field that does not exist ---");
    let criteria = Criteria::new().sort_by(SortSpec::ascending("score.vibes")?);
    match db.query(&criteria) {
        Ok(rows) => println!("  Got {} rows", rows.len()),
        Err(GovError::FieldNotFound { path }) => println!("  ✗ no such field: {path}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 3: Malformed filter expressions and directions
    println!("--- Example 3: Parsing filters and directions ---");
    for raw in ["score.overall>=80", "score.overall", ">=80"] {
        match raw.parse::<FieldFilter>() {
            Ok(f) => println!("  ok: {f}"),
            Err(e) => println!("  ✗ {raw:?}: {e}"),
        }
    }
    for raw in ["asc", "DESC", "sideways"] {
        match raw.parse::<SortDirection>() {
            Ok(d) => println!("  ok: {d}"),
            Err(e) => println!("  ✗ {raw:?}: {e}"),
        }
    }
    println!();

    // Example 4: Malformed JSON never yields partial records
    println!("--- Example 4: Malformed JSON ---");
    match parse_json(r#"[{"id": "x", "name": "X", "score": {"overall": "high"}}]"#) {
        Ok(records) => println!("  Parsed {} records", records.len()),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 5: Missing countries are not errors
    println!("--- Example 5: Looking up unknown ids ---");
    for id in ["xx", "", "united"] {
        match db.find_country_by_id(id) {
            Some(country) => println!("  Found: {} ({})", country.name(), country.id()),
            None => println!("  Not found: {id:?}"),
        }
    }

    Ok(())
}
