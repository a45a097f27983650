// crates/dialcodes-core/src/raw.rs
use serde::Deserialize;
use std::collections::BTreeMap;

/// Raw dial-code entry exactly as it appears in the JSON dataset:
///
/// ```json
/// { "code": "FR", "dial_code": "+33", "flag": "🇫🇷", "name": { "en": "France", "de": "Frankreich" } }
/// ```
///
/// Kept separate from [`crate::CountryRecord`] so normalization happens in
/// one place (`model::convert`).
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    pub code: String,
    pub dial_code: String,
    #[serde(default)]
    pub flag: String,
    #[serde(default)]
    pub name: BTreeMap<String, String>,
}

/// Top-level document. `null` is accepted and means "no countries".
pub type CountriesRaw = Option<Vec<CountryRaw>>;
