// crates/dialcodes-core/src/lib.rs

//! dialcodes-core
//! ==============
//!
//! Country dial-code directory for phone-number pickers: a static dataset of
//! countries (code, dial code, flag, localized names) plus a pure pipeline
//! that excludes, restricts, sorts and searches it.
//!
//! ```rust
//! use dialcodes_core::prelude::*;
//!
//! let db = CountryDirectory::bundled();
//! let criteria = FilterCriteria::new("en").exclude(["US"]).search("mex");
//! let visible = db.visible(&criteria);
//! assert_eq!(visible[0].code(), "MX");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod picker;
pub mod prelude;
pub mod text;
pub mod traits;
// Shared raw input, only used by the loaders
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::common::DirectoryStats;
pub use crate::error::{DialCodeError, Result};
pub use crate::filter::{
    build_sections, build_visible_list, filter_excluded, partition_popular,
    resolve_display_name, restrict_to_included, search, sort_by_localized_name, CodeSet,
    FilterCriteria, PopularPolicy, Sections,
};
pub use crate::loader::DATASET_VERSION;
pub use crate::model::{CountryDirectory, CountryRecord, LocalizedNames, DEFAULT_LANGUAGE};
pub use crate::picker::{DialerPicker, PickerMode, PickerOptions, PickerView};
pub use crate::text::remove_diacritics;
pub use crate::traits::{NameMatch, SelectHandler};
