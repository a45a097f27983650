use dialcodes_core::picker::PickerView;
use dialcodes_core::CountryRecord;
use serde::Serialize;

/// JSON shape of a picker listing.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListingJson<'a> {
    language: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    popular: Option<&'a [&'a CountryRecord]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    other_countries_title: Option<&'a str>,
    items: &'a [&'a CountryRecord],
    #[serde(skip_serializing_if = "Option::is_none")]
    empty_message: Option<&'a str>,
}

pub fn print_records(records: &[&CountryRecord], lang: &str, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
    } else {
        for r in records {
            println!("{}", r.row_label(lang));
        }
    }
    Ok(())
}

pub fn print_view(view: &PickerView<'_>, json: bool) -> anyhow::Result<()> {
    if json {
        let out = ListingJson {
            language: &view.language,
            popular: view.popular.as_ref().map(|p| p.items.as_slice()),
            other_countries_title: view
                .popular
                .as_ref()
                .map(|p| p.other_countries_title.as_str()),
            items: &view.items,
            empty_message: view.empty_message.as_deref(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if let Some(popular) = &view.popular {
        for row in view.popular_rows() {
            println!("{} {} {}", row.flag, row.dial_code, row.name);
        }
        println!("-- {} --", popular.other_countries_title);
    }
    for row in view.rows() {
        println!("{} {} {}", row.flag, row.dial_code, row.name);
    }
    if let Some(message) = &view.empty_message {
        println!("{message}");
    }
    Ok(())
}

pub fn print_country(r: &CountryRecord, lang: &str, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(r)?);
        return Ok(());
    }
    println!("Country: {}", r.display_name(lang));
    println!("Code: {}", r.code());
    println!("Dial code: {}", r.dial_code());
    println!("Flag: {}", r.flag());
    for lang in r.names().languages() {
        if let Some(name) = r.names().get(lang) {
            println!("  {lang}: {name}");
        }
    }
    Ok(())
}
