// crates/dialcodes-core/src/model/convert.rs
use super::{CountryDirectory, CountryRecord, LocalizedNames, DEFAULT_LANGUAGE};
use crate::raw::{CountriesRaw, CountryRaw};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Normalizes one raw entry: trimmed fields, uppercase code, trimmed names.
fn record_from_raw(raw: CountryRaw) -> CountryRecord {
    let name = raw
        .name
        .into_iter()
        .map(|(lang, name)| (lang.trim().to_owned(), name.trim().to_owned()))
        .collect::<LocalizedNames>();

    CountryRecord {
        code: raw.code.trim().to_ascii_uppercase(),
        dial_code: raw.dial_code.trim().to_owned(),
        flag: raw.flag.trim().to_owned(),
        name,
    }
}

/// Converts the deserialized JSON document into a directory.
///
/// A `null` document becomes an empty directory.
pub fn from_raw(raw: CountriesRaw) -> CountryDirectory {
    let records = raw
        .unwrap_or_default()
        .into_iter()
        .map(record_from_raw)
        .collect();
    CountryDirectory::from_records(records)
}

impl CountryDirectory {
    /// Builds a directory from already-typed records.
    ///
    /// Codes are uppercased. A record whose code was already seen is dropped
    /// (first one wins) so `code` stays a unique key. Records lacking an
    /// English name are kept; they resolve to `""` unless the requested
    /// language is present.
    pub fn from_records(records: Vec<CountryRecord>) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        let mut out = Vec::with_capacity(records.len());

        for mut record in records {
            record.code = record.code.to_ascii_uppercase();

            if !record.code.is_empty() && !seen.insert(record.code.clone()) {
                warn!(code = %record.code, "dropping duplicate country code");
                continue;
            }
            if record.name.en().is_none() {
                warn!(
                    code = %record.code,
                    lang = DEFAULT_LANGUAGE,
                    "country has no fallback name"
                );
            }
            out.push(record);
        }

        debug!(countries = out.len(), "country directory built");
        Self { records: out }
    }
}
