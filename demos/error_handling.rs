//! Error handling example for dialcodes-rs
//!
//! This example demonstrates loading datasets from disk and the edge cases
//! of lookups.

use dialcodes_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== dialcodes-rs Error Handling Example ===\n");

    // Example 1: Missing file
    println!("--- Example 1: Loading a dataset that does not exist ---");
    match CountryDirectory::load_from_path("does/not/exist.json", None) {
        Ok(db) => println!("✓ Loaded {} countries", db.len()),
        Err(DialCodeError::NotFound(path)) => println!("✗ Not found: {path}"),
        Err(e) => println!("✗ Failed: {e}"),
    }
    println!();

    // Example 2: Unsupported extension
    println!("--- Example 2: Unsupported file type ---");
    if let Err(e) = CountryDirectory::load_from_path("countries.csv", None) {
        println!("✗ {e}");
    }
    println!();

    // Example 3: Malformed and null JSON
    println!("--- Example 3: Parsing raw JSON ---");
    match CountryDirectory::from_json_str("[{\"code\": 1}]") {
        Ok(db) => println!("✓ {} countries", db.len()),
        Err(e) => println!("✗ {e}"),
    }
    let db = CountryDirectory::from_json_str("null")?;
    println!("null dataset -> {} countries", db.len());
    println!();

    // Example 4: Lookups that find nothing
    println!("--- Example 4: Unknown codes and names ---");
    let db = CountryDirectory::bundled();
    for code in ["XX", "", "ABCD", "123"] {
        match db.lookup(code, "en") {
            Some(country) => println!("  Found: {}", country.row_label("en")),
            None => println!("  Not found: {code:?}"),
        }
    }
    println!();

    // Example 5: Unknown language falls back to English
    println!("--- Example 5: Language fallback ---");
    if let Some(country) = db.find_by_code("JP") {
        println!("  ja: {}", country.display_name("ja"));
    }

    Ok(())
}
