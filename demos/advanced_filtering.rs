//! Advanced filtering example for dialcodes-rs
//!
//! This example demonstrates exclusion, allowlists, popular sections and the
//! stateful picker.

use dialcodes_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== dialcodes-rs Advanced Filtering Example ===\n");

    let db = CountryDirectory::bundled();

    // Example 1: Exclude and search
    println!("--- Example 1: Search 'mex' without the US ---");
    let criteria = FilterCriteria::new("en").exclude(["US"]).search("mex");
    for country in db.visible(&criteria) {
        println!("- {}", country.row_label("en"));
    }
    println!();

    // Example 2: Allowlist, German collation
    println!("--- Example 2: DACH countries in German ---");
    let criteria = FilterCriteria::new("de").include_only(["DE", "AT", "CH"]);
    for country in db.visible(&criteria) {
        println!("- {}", country.display_name("de"));
    }
    println!();

    // Example 3: Popular header with both policies
    println!("--- Example 3: Popular section policies ---");
    for policy in [PopularPolicy::ShowBoth, PopularPolicy::Dedupe] {
        let criteria = FilterCriteria::new("en")
            .include_only(["FR", "DE", "IT", "ES"])
            .popular(["ES", "FR"])
            .policy(policy);
        let sections = db.sections(&criteria);
        let popular: Vec<_> = sections.popular.iter().map(|c| c.code()).collect();
        let body: Vec<_> = sections.body.iter().map(|c| c.code()).collect();
        println!("{policy:?}: popular={popular:?} body={body:?}");
    }
    println!();

    // Example 4: Picker with a selection handler
    println!("--- Example 4: Picker session ---");
    let options = PickerOptions::new(FilterCriteria::new("es").popular(["MX", "AR"]))
        .other_countries_title("Otros países")
        .search_message("Sin resultados");
    let mut picked = Vec::new();
    {
        let mut picker = DialerPicker::new(db, options, |c: &CountryRecord| {
            picked.push(c.code().to_owned())
        });

        let view = picker.view();
        for row in view.popular_rows() {
            println!("* {} {} {}", row.flag, row.dial_code, row.name);
        }
        println!("{} rows below the header", view.items.len());

        picker.set_query("mexico");
        let view = picker.view();
        println!("'mexico' -> {} rows, header shown: {}", view.items.len(), view.popular.is_some());

        picker.set_query("zzz");
        if let Some(message) = picker.view().empty_message {
            println!("'zzz' -> {message}");
        }

        picker.select("MX");
    }
    println!("Selected: {picked:?}");

    Ok(())
}
