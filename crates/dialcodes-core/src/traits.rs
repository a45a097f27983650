// crates/dialcodes-core/src/traits.rs
use crate::filter::resolve_display_name;
use crate::model::{CountryDirectory, CountryRecord};
use crate::text::fold_key;

/// Receives the record a user picked.
///
/// This is the only outbound call the engine makes. Any
/// `FnMut(&CountryRecord)` closure is a handler.
///
/// ```rust
/// use dialcodes_core::{CountryDirectory, CountryRecord, SelectHandler};
///
/// let mut picked = Vec::new();
/// let mut handler = |r: &CountryRecord| picked.push(r.code().to_owned());
/// if let Some(gb) = CountryDirectory::bundled().find_by_code("gb") {
///     handler.on_select(gb);
/// }
/// assert_eq!(picked, ["GB"]);
/// ```
pub trait SelectHandler {
    fn on_select(&mut self, record: &CountryRecord);
}

impl<F> SelectHandler for F
where
    F: FnMut(&CountryRecord),
{
    #[inline]
    fn on_select(&mut self, record: &CountryRecord) {
        self(record)
    }
}

/// Name-based matching helpers for records, evaluated in a given language.
///
/// Comparisons go through [`fold_key`], so they ignore case and accents.
pub trait NameMatch {
    /// Name used for matching in `lang`.
    fn name_in(&self, lang: &str) -> &str;

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str, lang: &str) -> bool {
        fold_key(self.name_in(lang)) == fold_key(q)
    }

    /// Accent-insensitive + case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str, lang: &str) -> bool {
        fold_key(self.name_in(lang)).contains(&fold_key(q))
    }
}

impl NameMatch for CountryRecord {
    #[inline]
    fn name_in(&self, lang: &str) -> &str {
        resolve_display_name(self, lang)
    }
}

impl CountryDirectory {
    /// Find a record by its exact name in `lang` (falling back to English),
    /// ignoring case and accents: `"mexique"` finds Mexico for `"fr"`.
    pub fn find_by_name(&self, name: &str, lang: &str) -> Option<&CountryRecord> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.records
            .iter()
            .find(|r| r.is_named(name, lang) || r.is_named(name, crate::DEFAULT_LANGUAGE))
    }

    /// Find a record by code first, then by name.
    pub fn lookup(&self, code_or_name: &str, lang: &str) -> Option<&CountryRecord> {
        self.find_by_code(code_or_name)
            .or_else(|| self.find_by_name(code_or_name, lang))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_handlers() {
        let db = CountryDirectory::bundled();
        let mut seen = Vec::new();
        {
            let mut handler = |r: &CountryRecord| seen.push(r.code().to_owned());
            for code in ["FR", "JP"] {
                if let Some(r) = db.find_by_code(code) {
                    handler.on_select(r);
                }
            }
        }
        assert_eq!(seen, ["FR", "JP"]);
    }

    #[test]
    fn name_match_ignores_accents() {
        let db = CountryDirectory::bundled();
        let mx = db.find_by_code("MX").unwrap();
        assert!(mx.is_named("mexico", "es"));
        assert!(mx.name_contains("XIC", "es"));
        assert!(!mx.is_named("mexi", "es"));
    }

    #[test]
    fn find_by_name_uses_language_then_english() {
        let db = CountryDirectory::bundled();
        assert_eq!(db.find_by_name("Allemagne", "fr").map(|r| r.code()), Some("DE"));
        assert_eq!(db.find_by_name("germany", "fr").map(|r| r.code()), Some("DE"));
        assert!(db.find_by_name("", "fr").is_none());
    }

    #[test]
    fn lookup_prefers_codes() {
        let db = CountryDirectory::bundled();
        assert_eq!(db.lookup("no", "en").map(|r| r.code()), Some("NO"));
        assert_eq!(db.lookup("Norway", "en").map(|r| r.code()), Some("NO"));
    }
}
