// crates/dialcodes-core/src/picker.rs

//! Presentation model of a dial-code picker.
//!
//! [`DialerPicker`] owns nothing but the current query and its options. Each
//! call to [`DialerPicker::view`] recomputes the list from the directory, so
//! a UI layer can call it on every keystroke and render the returned
//! [`PickerView`] however it likes.

use crate::filter::{build_sections, build_visible_list, FilterCriteria};
use crate::model::{CountryDirectory, CountryRecord};
use crate::traits::SelectHandler;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_OTHER_COUNTRIES_TITLE: &str = "Other Countries";
pub const DEFAULT_SEARCH_MESSAGE: &str = "Sorry we cant find your dialer :(";
pub const DEFAULT_PLACEHOLDER: &str = "Search your dialer";

/// How the popular header behaves while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickerMode {
    /// Search-driven dialog: the header disappears as soon as a query is typed.
    #[default]
    Modal,
    /// Embedded list: the header stays visible while searching.
    List,
}

/// Static configuration of a picker. `criteria.search_text` is the initial query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerOptions {
    pub criteria: FilterCriteria,
    pub mode: PickerMode,
    pub other_countries_title: Option<String>,
    pub search_message: Option<String>,
    pub placeholder: Option<String>,
}

impl PickerOptions {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            ..Self::default()
        }
    }

    pub fn mode(mut self, mode: PickerMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn other_countries_title(mut self, title: impl Into<String>) -> Self {
        self.other_countries_title = Some(title.into());
        self
    }

    pub fn search_message(mut self, message: impl Into<String>) -> Self {
        self.search_message = Some(message.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// One rendered line: the record plus its resolved name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PickerRow<'a> {
    pub key: &'a str,
    pub flag: &'a str,
    pub dial_code: &'a str,
    pub name: &'a str,
    #[serde(skip)]
    pub record: &'a CountryRecord,
}

impl<'a> PickerRow<'a> {
    fn new(record: &'a CountryRecord, lang: &str) -> Self {
        Self {
            key: record.item_key(),
            flag: record.flag(),
            dial_code: record.dial_code(),
            name: record.display_name(lang),
            record,
        }
    }
}

/// Header block listing the popular countries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopularSection<'a> {
    pub items: Vec<&'a CountryRecord>,
    /// Title rendered between the header and the main list.
    pub other_countries_title: String,
}

/// Everything a UI needs to draw the picker for the current query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerView<'a> {
    pub language: String,
    pub popular: Option<PopularSection<'a>>,
    pub items: Vec<&'a CountryRecord>,
    /// Set when `items` is empty.
    pub empty_message: Option<String>,
}

impl<'a> PickerView<'a> {
    pub fn rows(&self) -> impl Iterator<Item = PickerRow<'a>> + '_ {
        self.items
            .iter()
            .copied()
            .map(move |r| PickerRow::new(r, &self.language))
    }

    pub fn popular_rows(&self) -> impl Iterator<Item = PickerRow<'a>> + '_ {
        self.popular
            .iter()
            .flat_map(|p| p.items.iter().copied())
            .map(move |r| PickerRow::new(r, &self.language))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Query state plus selection plumbing for one picker instance.
pub struct DialerPicker<'a, H> {
    directory: &'a CountryDirectory,
    options: PickerOptions,
    query: String,
    handler: H,
}

impl<'a, H: SelectHandler> DialerPicker<'a, H> {
    pub fn new(directory: &'a CountryDirectory, options: PickerOptions, handler: H) -> Self {
        let query = options.criteria.search_text.clone().unwrap_or_default();
        Self {
            directory,
            options,
            query,
            handler,
        }
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn language(&self) -> &str {
        &self.options.criteria.language
    }

    pub fn set_language(&mut self, lang: impl Into<String>) {
        self.options.criteria.language = lang.into();
    }

    pub fn placeholder(&self) -> &str {
        self.options
            .placeholder
            .as_deref()
            .unwrap_or(DEFAULT_PLACEHOLDER)
    }

    fn header_visible(&self) -> bool {
        !self.options.criteria.popular_codes.is_empty()
            && (self.options.mode == PickerMode::List || self.query.is_empty())
    }

    /// Recomputes the visible list for the current query.
    pub fn view(&self) -> PickerView<'a> {
        let mut criteria = self.options.criteria.clone();
        criteria.search_text = Some(self.query.clone());

        let (popular, items) = if self.header_visible() {
            let sections = build_sections(self.directory.records(), &criteria);
            let title = self
                .options
                .other_countries_title
                .clone()
                .unwrap_or_else(|| DEFAULT_OTHER_COUNTRIES_TITLE.to_owned());
            let popular = PopularSection {
                items: sections.popular,
                other_countries_title: title,
            };
            (Some(popular), sections.body)
        } else {
            (None, build_visible_list(self.directory.records(), &criteria))
        };

        let empty_message = items.is_empty().then(|| {
            self.options
                .search_message
                .clone()
                .unwrap_or_else(|| DEFAULT_SEARCH_MESSAGE.to_owned())
        });

        PickerView {
            language: criteria.language,
            popular,
            items,
            empty_message,
        }
    }

    /// Whether `record` can appear in a rendered row: the excluded and
    /// show-only rules pass, or it sits in the visible popular header.
    fn offers(&self, record: &CountryRecord) -> bool {
        let criteria = &self.options.criteria;
        if criteria.excluded_codes.contains(&record.code) {
            return false;
        }
        let in_body = criteria.include_only_codes.is_empty()
            || criteria.include_only_codes.contains(&record.code);
        in_body || (self.header_visible() && criteria.popular_codes.contains(&record.code))
    }

    /// Picks the record with `code` and hands it to the handler.
    ///
    /// Codes the picker does not offer return `None` and the handler is not
    /// called.
    pub fn select(&mut self, code: &str) -> Option<&'a CountryRecord> {
        let record = self.directory.find_by_code(code)?;
        if !self.offers(record) {
            debug!(code = %record.code(), "ignoring selection outside the offered list");
            return None;
        }
        debug!(code = %record.code(), "dial code selected");
        self.handler.on_select(record);
        Some(record)
    }

    pub fn into_handler(self) -> H {
        self.handler
    }
}
