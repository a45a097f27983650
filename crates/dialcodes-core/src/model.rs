// crates/dialcodes-core/src/model.rs

//! Dataset types: [`CountryRecord`], [`LocalizedNames`] and the immutable
//! [`CountryDirectory`] holding them.

pub mod convert;

use crate::common::DirectoryStats;
use crate::filter::resolve_display_name;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Language every record is expected to carry a name for.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Display names of one country keyed by language code (`"en"`, `"es"`, `"ua"`...).
///
/// Language codes are opaque strings; the dataset decides which exist.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedNames(BTreeMap<String, String>);

impl LocalizedNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the name for `lang`.
    pub fn with(mut self, lang: impl Into<String>, name: impl Into<String>) -> Self {
        self.0.insert(lang.into(), name.into());
        self
    }

    /// Name for `lang`, ignoring empty entries.
    pub fn get(&self, lang: &str) -> Option<&str> {
        self.0
            .get(lang)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// The English name, if present and non-empty.
    pub fn en(&self) -> Option<&str> {
        self.get(DEFAULT_LANGUAGE)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocalizedNames {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// One country entry of the dial-code dataset.
///
/// Serializes to the same shape as the bundled JSON
/// (`code`, `dial_code`, `flag`, `name`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// ISO 3166-1 alpha-2 code, uppercase.
    pub code: String,
    /// International prefix such as `"+44"`. Not unique.
    pub dial_code: String,
    /// Display glyph, usually a regional-indicator emoji.
    pub flag: String,
    pub name: LocalizedNames,
}

impl CountryRecord {
    pub fn new(
        code: impl Into<String>,
        dial_code: impl Into<String>,
        flag: impl Into<String>,
        name: LocalizedNames,
    ) -> Self {
        Self {
            code: code.into(),
            dial_code: dial_code.into(),
            flag: flag.into(),
            name,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn dial_code(&self) -> &str {
        &self.dial_code
    }

    /// Dial code without the leading `+` and without spaces (`"+1 684"` -> `"1684"`).
    pub fn dial_digits(&self) -> String {
        self.dial_code
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect()
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }

    pub fn names(&self) -> &LocalizedNames {
        &self.name
    }

    /// Name shown for `lang`, falling back to English, then to `""`.
    pub fn display_name(&self, lang: &str) -> &str {
        resolve_display_name(self, lang)
    }

    /// Stable list key: the country code, or the dial code for code-less entries.
    pub fn item_key(&self) -> &str {
        if self.code.is_empty() {
            &self.dial_code
        } else {
            &self.code
        }
    }

    /// One-line rendering used by the CLI: flag, dial code, name.
    pub fn row_label(&self, lang: &str) -> String {
        format!("{} {} {}", self.flag, self.dial_code, self.display_name(lang))
    }
}

/// The immutable country universe.
///
/// Built once (see [`CountryDirectory::bundled`]) and only read afterwards;
/// every query borrows records from it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CountryDirectory {
    pub(crate) records: Vec<CountryRecord>,
}

impl CountryDirectory {
    /// A directory without any countries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All records in dataset order.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by country code, case-insensitive (e.g. "GB", "gb").
    pub fn find_by_code(&self, code: &str) -> Option<&CountryRecord> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.records
            .iter()
            .find(|r| r.code.eq_ignore_ascii_case(code))
    }

    /// All records sharing a dial code. Accepts `"+44"`, `"44"` or `" +44 "`.
    pub fn find_by_dial_code(&self, dial_code: &str) -> Vec<&CountryRecord> {
        let wanted: String = dial_code.chars().filter(|c| c.is_ascii_digit()).collect();
        if wanted.is_empty() {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|r| r.dial_digits() == wanted)
            .collect()
    }

    /// Every language code present in at least one record, sorted.
    pub fn languages(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .flat_map(|r| r.name.languages())
            .collect()
    }

    /// Aggregate statistics for the directory.
    pub fn stats(&self) -> DirectoryStats {
        let mut per_dial: BTreeMap<&str, usize> = BTreeMap::new();
        for r in &self.records {
            *per_dial.entry(r.dial_code.as_str()).or_default() += 1;
        }

        DirectoryStats {
            countries: self.records.len(),
            languages: self.languages().len(),
            shared_dial_codes: per_dial.values().filter(|&&n| n > 1).count(),
        }
    }
}
