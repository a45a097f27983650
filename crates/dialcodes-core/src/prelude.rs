//! dialcodes prelude: bring common types and traits into scope for examples.

pub use crate::error::{DialCodeError, Result};
pub use crate::filter::{CodeSet, FilterCriteria, PopularPolicy, Sections};
pub use crate::model::{CountryDirectory, CountryRecord, LocalizedNames, DEFAULT_LANGUAGE};
pub use crate::picker::{DialerPicker, PickerMode, PickerOptions, PickerRow, PickerView};
pub use crate::text::{equals_folded, fold_key, remove_diacritics};
pub use crate::traits::{NameMatch, SelectHandler};
