// crates/dialcodes-core/src/filter.rs

//! The search / filter / partition pipeline.
//!
//! Every function here is pure: records are borrowed from a
//! [`CountryDirectory`] and returned as new `Vec<&CountryRecord>` sequences,
//! nothing is mutated and nothing can fail. The composite
//! [`build_visible_list`] runs, in order:
//!
//! 1. [`filter_excluded`]
//! 2. [`restrict_to_included`]
//! 3. [`sort_by_localized_name`]
//! 4. [`search`]
//!
//! Sorting happens before searching, so search results are already in
//! alphabetical order for the active language.

use crate::model::{CountryDirectory, CountryRecord, DEFAULT_LANGUAGE};
use crate::text::{remove_diacritics, CollationKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of country codes, normalized to uppercase on insertion.
///
/// An empty set means "no rule" wherever it is used as an allowlist.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CodeSet(BTreeSet<String>);

impl CodeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: &str) {
        let code = code.trim();
        if !code.is_empty() {
            self.0.insert(code.to_ascii_uppercase());
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains(&code.to_ascii_uppercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Parses a comma-separated list such as `"us, DE,fr"`.
    pub fn parse_list(list: &str) -> Self {
        list.split(',').collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CodeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = CodeSet::new();
        for code in iter {
            set.insert(code.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for CodeSet {
    fn from(codes: Vec<String>) -> Self {
        codes.into_iter().collect()
    }
}

impl From<CodeSet> for Vec<String> {
    fn from(set: CodeSet) -> Self {
        set.0.into_iter().collect()
    }
}

/// What to do with popular countries that also appear in the main list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopularPolicy {
    /// Popular entries are listed in the header section and again in the body.
    #[default]
    ShowBoth,
    /// Popular entries are removed from the body while the header is shown.
    Dedupe,
}

/// Per-query input to the pipeline. Every field is optional in practice:
/// empty sets and an empty search text disable the corresponding step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    pub excluded_codes: CodeSet,
    pub include_only_codes: CodeSet,
    pub popular_codes: CodeSet,
    pub language: String,
    pub search_text: Option<String>,
    pub popular_policy: PopularPolicy,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            excluded_codes: CodeSet::new(),
            include_only_codes: CodeSet::new(),
            popular_codes: CodeSet::new(),
            language: DEFAULT_LANGUAGE.to_owned(),
            search_text: None,
            popular_policy: PopularPolicy::default(),
        }
    }
}

impl FilterCriteria {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Self::default()
        }
    }

    pub fn exclude<S: AsRef<str>>(mut self, codes: impl IntoIterator<Item = S>) -> Self {
        self.excluded_codes = codes.into_iter().collect();
        self
    }

    pub fn include_only<S: AsRef<str>>(mut self, codes: impl IntoIterator<Item = S>) -> Self {
        self.include_only_codes = codes.into_iter().collect();
        self
    }

    pub fn popular<S: AsRef<str>>(mut self, codes: impl IntoIterator<Item = S>) -> Self {
        self.popular_codes = codes.into_iter().collect();
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    pub fn policy(mut self, policy: PopularPolicy) -> Self {
        self.popular_policy = policy;
        self
    }

    /// Search text, with `None` folded into `""`.
    pub fn query(&self) -> &str {
        self.search_text.as_deref().unwrap_or("")
    }
}

/// Name shown for `record` in `language`.
///
/// Falls back to the English name, then to the empty string. Never fails.
pub fn resolve_display_name<'a>(record: &'a CountryRecord, language: &str) -> &'a str {
    record
        .name
        .get(language)
        .or_else(|| record.name.en())
        .unwrap_or("")
}

/// Drops every record whose code is in `excluded`. Order is preserved.
pub fn filter_excluded<'a, I>(records: I, excluded: &CodeSet) -> Vec<&'a CountryRecord>
where
    I: IntoIterator<Item = &'a CountryRecord>,
{
    records
        .into_iter()
        .filter(|r| !excluded.contains(&r.code))
        .collect()
}

/// Keeps only records whose code is in `include_only`.
///
/// An empty allowlist is not a rule: the input comes back unchanged.
pub fn restrict_to_included<'a, I>(records: I, include_only: &CodeSet) -> Vec<&'a CountryRecord>
where
    I: IntoIterator<Item = &'a CountryRecord>,
{
    if include_only.is_empty() {
        return records.into_iter().collect();
    }
    records
        .into_iter()
        .filter(|r| include_only.contains(&r.code))
        .collect()
}

/// Stable sort by the resolved display name using [`CollationKey`].
///
/// Returns a new sequence; records with the same name keep their input order.
pub fn sort_by_localized_name<'a>(
    records: &[&'a CountryRecord],
    language: &str,
) -> Vec<&'a CountryRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_cached_key(|r| CollationKey::new(resolve_display_name(r, language)));
    sorted
}

/// Subsequence of `records` whose code is in `popular`, in input order.
///
/// This only selects entries for a header section; the main list is built
/// independently.
pub fn partition_popular<'a, I>(records: I, popular: &CodeSet) -> Vec<&'a CountryRecord>
where
    I: IntoIterator<Item = &'a CountryRecord>,
{
    if popular.is_empty() {
        return Vec::new();
    }
    records
        .into_iter()
        .filter(|r| popular.contains(&r.code))
        .collect()
}

/// Free-text search over dial code and display name.
///
/// An empty query returns the input unchanged. Otherwise a record is kept if
/// - its dial code contains `query` verbatim (`"+44"`), or
/// - its lowercased name contains the lowercased, trimmed query, or
/// - the same comparison holds with diacritics stripped from both sides
///   (`"mexico"` finds `"México"`).
///
/// Order is preserved.
pub fn search<'a, I>(records: I, query: &str, language: &str) -> Vec<&'a CountryRecord>
where
    I: IntoIterator<Item = &'a CountryRecord>,
{
    if query.is_empty() {
        return records.into_iter().collect();
    }

    let lowered = query.to_lowercase();
    let lowered = lowered.trim();
    let stripped = remove_diacritics(lowered);

    records
        .into_iter()
        .filter(|r| {
            if r.dial_code.contains(query) {
                return true;
            }
            let name = resolve_display_name(r, language).to_lowercase();
            name.contains(lowered) || remove_diacritics(&name).contains(&stripped)
        })
        .collect()
}

/// Runs the full pipeline: exclude, restrict, sort, search.
pub fn build_visible_list<'a>(
    dataset: &'a [CountryRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a CountryRecord> {
    let kept = filter_excluded(dataset, &criteria.excluded_codes);
    let kept = restrict_to_included(kept, &criteria.include_only_codes);
    let sorted = sort_by_localized_name(&kept, &criteria.language);
    search(sorted, criteria.query(), &criteria.language)
}

/// Header and body of a picker list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections<'a> {
    /// Popular entries, in dataset order.
    pub popular: Vec<&'a CountryRecord>,
    /// Result of [`build_visible_list`], deduplicated under [`PopularPolicy::Dedupe`].
    pub body: Vec<&'a CountryRecord>,
}

/// Builds both sections for `criteria`.
///
/// The popular section is taken from the exclusion-filtered dataset; the
/// show-only list and the search text do not narrow it.
pub fn build_sections<'a>(dataset: &'a [CountryRecord], criteria: &FilterCriteria) -> Sections<'a> {
    let popular = partition_popular(
        filter_excluded(dataset, &criteria.excluded_codes),
        &criteria.popular_codes,
    );
    let mut body = build_visible_list(dataset, criteria);

    if criteria.popular_policy == PopularPolicy::Dedupe && !popular.is_empty() {
        body.retain(|r| !criteria.popular_codes.contains(&r.code));
    }

    Sections { popular, body }
}

impl CountryDirectory {
    /// [`build_visible_list`] over this directory.
    pub fn visible(&self, criteria: &FilterCriteria) -> Vec<&CountryRecord> {
        build_visible_list(&self.records, criteria)
    }

    /// Popular countries for `criteria`, exclusions applied.
    pub fn popular(&self, criteria: &FilterCriteria) -> Vec<&CountryRecord> {
        partition_popular(
            filter_excluded(&self.records, &criteria.excluded_codes),
            &criteria.popular_codes,
        )
    }

    /// [`build_sections`] over this directory.
    pub fn sections(&self, criteria: &FilterCriteria) -> Sections<'_> {
        build_sections(&self.records, criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LocalizedNames;

    fn record(code: &str, dial: &str, names: &[(&str, &str)]) -> CountryRecord {
        CountryRecord::new(code, dial, "", names.iter().copied().collect::<LocalizedNames>())
    }

    fn dataset() -> Vec<CountryRecord> {
        vec![
            record("US", "+1", &[("en", "United States"), ("es", "Estados Unidos")]),
            record("FR", "+33", &[("en", "France"), ("es", "Francia")]),
            record("MX", "+52", &[("en", "México"), ("es", "México")]),
            record("GB", "+44", &[("en", "United Kingdom"), ("es", "Reino Unido")]),
            record("DE", "+49", &[("en", "Germany"), ("es", "Alemania")]),
        ]
    }

    fn codes(records: &[&CountryRecord]) -> Vec<String> {
        records.iter().map(|r| r.code.clone()).collect()
    }

    #[test]
    fn code_set_normalizes_case_and_blanks() {
        let set = CodeSet::parse_list(" us, de ,, Fr");
        assert_eq!(set.len(), 3);
        assert!(set.contains("US"));
        assert!(set.contains("de"));
        assert!(set.contains("fr"));
    }

    #[test]
    fn code_set_deserializes_lowercase_input() {
        let set: CodeSet = serde_json::from_str(r#"["gb","Us"]"#).unwrap();
        assert!(set.contains("GB"));
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["GB","US"]"#);
    }

    #[test]
    fn criteria_deserialize_partially() {
        let c: FilterCriteria =
            serde_json::from_str(r#"{"excludedCodes":["us"],"searchText":"mex"}"#).unwrap();
        assert!(c.excluded_codes.contains("US"));
        assert_eq!(c.language, "en");
        assert_eq!(c.query(), "mex");
        assert!(c.include_only_codes.is_empty());
    }

    #[test]
    fn display_name_fallback_chain() {
        let r = record("MX", "+52", &[("en", "Mexico"), ("es", "México"), ("de", "")]);
        assert_eq!(resolve_display_name(&r, "es"), "México");
        assert_eq!(resolve_display_name(&r, "de"), "Mexico");
        assert_eq!(resolve_display_name(&r, "xx"), "Mexico");

        let nameless = record("ZZ", "+999", &[("fr", "Zède")]);
        assert_eq!(resolve_display_name(&nameless, "de"), "");
        assert_eq!(resolve_display_name(&nameless, "fr"), "Zède");
    }

    #[test]
    fn exclusion_is_case_insensitive() {
        let data = dataset();
        let excluded: CodeSet = ["us", "Gb"].into_iter().collect();
        let kept = filter_excluded(&data, &excluded);
        assert_eq!(codes(&kept), ["FR", "MX", "DE"]);
    }

    #[test]
    fn empty_include_list_is_identity() {
        let data = dataset();
        let kept = restrict_to_included(&data, &CodeSet::new());
        assert_eq!(kept.len(), data.len());
    }

    #[test]
    fn include_list_never_adds_entries() {
        let data = dataset();
        let kept = filter_excluded(&data, &CodeSet::parse_list("FR"));
        let kept = restrict_to_included(kept, &CodeSet::parse_list("fr,de,jp"));
        assert_eq!(codes(&kept), ["DE"]);
    }

    #[test]
    fn sorts_by_language() {
        let data = dataset();
        let all: Vec<_> = data.iter().collect();
        assert_eq!(
            codes(&sort_by_localized_name(&all, "en")),
            ["FR", "DE", "MX", "GB", "US"]
        );
        assert_eq!(
            codes(&sort_by_localized_name(&all, "es")),
            ["DE", "US", "FR", "MX", "GB"]
        );
    }

    #[test]
    fn sort_keeps_input_order_for_equal_names() {
        let data = vec![
            record("B1", "+1", &[("en", "Same")]),
            record("A0", "+0", &[("en", "Alpha")]),
            record("B2", "+2", &[("en", "Same")]),
        ];
        let all: Vec<_> = data.iter().collect();
        assert_eq!(codes(&sort_by_localized_name(&all, "en")), ["A0", "B1", "B2"]);
    }

    #[test]
    fn nameless_records_sort_first() {
        let data = vec![
            record("FR", "+33", &[("en", "France")]),
            record("ZZ", "+999", &[]),
        ];
        let all: Vec<_> = data.iter().collect();
        assert_eq!(codes(&sort_by_localized_name(&all, "en")), ["ZZ", "FR"]);
    }

    #[test]
    fn popular_partition_keeps_input_order() {
        let data = dataset();
        let popular = partition_popular(&data, &CodeSet::parse_list("de,us"));
        assert_eq!(codes(&popular), ["US", "DE"]);
        assert!(partition_popular(&data, &CodeSet::new()).is_empty());
    }

    #[test]
    fn search_matches_dial_code_verbatim() {
        let data = dataset();
        assert_eq!(codes(&search(&data, "+44", "en")), ["GB"]);
        assert_eq!(codes(&search(&data, "+44", "es")), ["GB"]);
        assert_eq!(codes(&search(&data, "4", "en")), ["GB", "DE"]);
    }

    #[test]
    fn search_ignores_case_and_accents() {
        let data = dataset();
        assert_eq!(codes(&search(&data, "FRANCE", "en")), ["FR"]);
        assert_eq!(codes(&search(&data, "mexico", "en")), ["MX"]);
        assert_eq!(codes(&search(&data, "MÉX", "en")), ["MX"]);
        assert_eq!(codes(&search(&data, "  united ", "en")), ["US", "GB"]);
    }

    #[test]
    fn search_uses_active_language() {
        let data = dataset();
        assert_eq!(codes(&search(&data, "alem", "es")), ["DE"]);
        assert!(search(&data, "alem", "en").is_empty());
    }

    #[test]
    fn empty_query_is_identity() {
        let data = dataset();
        assert_eq!(search(&data, "", "en").len(), data.len());
    }

    #[test]
    fn blank_query_matches_everything() {
        let data = dataset();
        assert_eq!(search(&data, "   ", "en").len(), data.len());
    }

    #[test]
    fn pipeline_sorts_before_search() {
        let data = dataset();
        let criteria = FilterCriteria::new("en").search("united");
        assert_eq!(codes(&build_visible_list(&data, &criteria)), ["GB", "US"]);
    }

    #[test]
    fn sections_show_popular_twice_by_default() {
        let data = dataset();
        let criteria = FilterCriteria::new("en").popular(["fr"]);
        let sections = build_sections(&data, &criteria);
        assert_eq!(codes(&sections.popular), ["FR"]);
        assert!(sections.body.iter().any(|r| r.code == "FR"));
    }

    #[test]
    fn sections_dedupe_on_request() {
        let data = dataset();
        let criteria = FilterCriteria::new("en")
            .popular(["fr"])
            .policy(PopularPolicy::Dedupe);
        let sections = build_sections(&data, &criteria);
        assert_eq!(codes(&sections.popular), ["FR"]);
        assert_eq!(codes(&sections.body), ["DE", "MX", "GB", "US"]);
    }

    #[test]
    fn popular_ignores_show_only_but_honours_exclusion() {
        let data = dataset();
        let criteria = FilterCriteria::new("en")
            .exclude(["us"])
            .include_only(["de"])
            .popular(["us", "fr"]);
        let sections = build_sections(&data, &criteria);
        assert_eq!(codes(&sections.popular), ["FR"]);
        assert_eq!(codes(&sections.body), ["DE"]);
    }
}
