// crates/dialcodes-core/src/text.rs

//! Text folding helpers used by search and sorting.
//!
//! Two flavours of normalisation live here:
//! - [`remove_diacritics`] is the narrow one: canonical decomposition followed
//!   by dropping the combining marks block (`México` -> `Mexico`). Search uses it.
//! - [`fold_key`] is the aggressive one: full transliteration via `deunicode`
//!   (`Straße` -> `strasse`), handy for code/alias style equality.
//!
//! [`CollationKey`] combines both into a multi-level sort key so country names
//! order the way a person expects rather than by raw code point.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// Range of "Combining Diacritical Marks" stripped after NFD.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Removes accents and other combining marks from `text`.
///
/// The string is decomposed (NFD) and every code point in
/// U+0300..=U+036F is dropped. Letters without a canonical decomposition
/// (`ß`, `ø`, `ł`) are left alone.
///
/// # Examples
///
/// ```rust
/// use dialcodes_core::text::remove_diacritics;
///
/// assert_eq!(remove_diacritics("México"), "Mexico");
/// assert_eq!(remove_diacritics("Côte d'Ivoire"), "Cote d'Ivoire");
/// assert_eq!(remove_diacritics(""), "");
/// ```
pub fn remove_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !COMBINING_MARKS.contains(c)).collect()
}

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Åland` -> `Aland`)
/// 2\) Normalize to lowercase
///
/// ```rust
/// use dialcodes_core::text::fold_key;
///
/// assert_eq!(fold_key("Åland Islands"), "aland islands");
/// assert_eq!(fold_key("Straße"), "strasse");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and normalization.
///
/// ```rust
/// use dialcodes_core::text::equals_folded;
///
/// assert!(equals_folded("Curaçao", "curacao"));
/// assert!(!equals_folded("Niger", "Nigeria"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Latin letters that survive NFD untouched (`ß`, `ø`, `ł`, `æ`, `đ`...).
#[inline]
fn is_extended_latin(c: char) -> bool {
    matches!(c, '\u{00c0}'..='\u{024f}' | '\u{1e00}'..='\u{1eff}')
}

/// Primary collation weight: no accents, no case, extended Latin
/// transliterated, every other script kept in native order.
fn primary_weight(s: &str) -> String {
    let stripped = remove_diacritics(s).to_lowercase();
    let mut out = String::with_capacity(stripped.len());
    for c in stripped.chars() {
        if is_extended_latin(c) {
            match deunicode::deunicode_char(c) {
                Some(t) => out.push_str(&t.to_lowercase()),
                None => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Multi-level sort key approximating locale collation.
///
/// Levels, compared in order:
/// 1. base letters (accents and case ignored)
/// 2. accents (`Mexico` before `México`)
/// 3. case (lowercase before uppercase)
/// 4. the raw string, so the order is total
///
/// The empty string sorts before everything else.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: String,
    secondary: String,
    tertiary: Vec<bool>,
    raw: String,
}

impl CollationKey {
    pub fn new(s: &str) -> Self {
        Self {
            primary: primary_weight(s),
            secondary: s.to_lowercase(),
            tertiary: s.chars().map(|c| !c.is_lowercase()).collect(),
            raw: s.to_owned(),
        }
    }
}

/// Locale-style comparison of two display names.
///
/// ```rust
/// use std::cmp::Ordering;
/// use dialcodes_core::text::locale_cmp;
///
/// assert_eq!(locale_cmp("México", "Norway"), Ordering::Less);
/// assert_eq!(locale_cmp("Åland Islands", "Albania"), Ordering::Less);
/// assert_eq!(locale_cmp("", "Afghanistan"), Ordering::Less);
/// ```
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}
