//! Basic usage example for dialcodes-rs
//!
//! This example demonstrates how to:
//! - Access the bundled dial-code directory
//! - Look countries up by code, name and dial code
//! - Build the sorted list a picker shows
//! - Search by name or dial code

use dialcodes_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== dialcodes-rs Basic Usage Example ===\n");

    let db = CountryDirectory::bundled();
    println!(
        "✓ Dataset {} loaded: {} countries\n",
        dialcodes_rs::DATASET_VERSION,
        db.len()
    );

    // Example 1: Sorted list in English
    println!("--- Example 1: First countries in English order ---");
    let all = db.visible(&FilterCriteria::new("en"));
    for (i, country) in all.iter().take(5).enumerate() {
        println!("{}. {}", i + 1, country.row_label("en"));
    }
    println!("... and {} more\n", all.len().saturating_sub(5));

    // Example 2: Lookup by code
    println!("--- Example 2: Find country by code ---");
    if let Some(country) = db.find_by_code("mx") {
        println!("Code: {}", country.code());
        println!("Dial code: {}", country.dial_code());
        println!("Flag: {}", country.flag());
        for lang in ["en", "es", "fr", "de"] {
            println!("  {lang}: {}", country.display_name(lang));
        }
    }
    println!();

    // Example 3: Lookup by localized name
    println!("--- Example 3: Find country by French name ---");
    if let Some(country) = db.find_by_name("Allemagne", "fr") {
        println!("Allemagne -> {} ({})", country.display_name("en"), country.code());
    }
    println!();

    // Example 4: Countries sharing a dial code
    println!("--- Example 4: Countries using +1 ---");
    for country in db.find_by_dial_code("+1").iter().take(8) {
        println!("  {}", country.row_label("en"));
    }
    println!();

    // Example 5: Search, accent-insensitive
    println!("--- Example 5: Search 'etats' in French ---");
    let hits = db.visible(&FilterCriteria::new("fr").search("etats"));
    for country in &hits {
        println!("  {}", country.row_label("fr"));
    }
    println!();

    // Example 6: Dataset statistics
    println!("--- Example 6: Statistics ---");
    let stats = db.stats();
    println!("Countries: {}", stats.countries);
    println!("Languages: {}", stats.languages);
    println!("Shared dial codes: {}", stats.shared_dial_codes);

    Ok(())
}
