//! dialcodes-wasm — WebAssembly bindings for dialcodes-core
//!
//! Exposes the bundled dial-code directory and the picker pipeline to
//! JavaScript. The dataset is compiled into the module, so nothing has to be
//! fetched at runtime.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Basic queries: `country_count()`, `country_name(code, lang)`
//! - Pipeline helpers taking a criteria object and returning plain JS arrays:
//!   - `visible_list({ excludedCodes, includeOnlyCodes, language, searchText })`
//!   - `popular_countries({ popularCodes, excludedCodes })`
//!   - `search("mex", "es")`
//! - A stateful `Picker` class that calls back into JS on selection
//!
//! Quick start
//! -----------
//! ```javascript
//! import init, { Picker, visible_list } from 'dialcodes-wasm';
//!
//! await init();
//! console.log(visible_list({ excludedCodes: ['US'], searchText: 'mex' }));
//!
//! const picker = new Picker({ criteria: { popularCodes: ['DE', 'FR'] } },
//!                           (country) => console.log('picked', country.code));
//! picker.set_query('ger');
//! console.log(picker.view());
//! picker.select('DE');
//! ```
use dialcodes_core::picker::{DialerPicker, PickerOptions, PickerRow};
use dialcodes_core::prelude::*;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use std::result::Result;
use wasm_bindgen::prelude::*;

fn db() -> &'static CountryDirectory {
    CountryDirectory::bundled()
}

fn criteria_from(value: JsValue) -> Result<FilterCriteria, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(FilterCriteria::default());
    }
    Ok(from_value(value)?)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let db = db();
    web_sys::console::log_1(
        &format!(
            "✓ dialcodes {} loaded with {} countries",
            dialcodes_core::DATASET_VERSION,
            db.len()
        )
        .into(),
    );
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn country_count() -> usize {
    db().len()
}

#[wasm_bindgen]
pub fn country_name(code: &str, lang: Option<String>) -> Option<String> {
    let lang = lang.as_deref().unwrap_or(DEFAULT_LANGUAGE);
    db().find_by_code(code).map(|r| r.display_name(lang).to_string())
}

#[wasm_bindgen]
pub fn languages() -> Vec<String> {
    db().languages().into_iter().map(str::to_string).collect()
}

/* --------------------------------------------------------------------------
   Pipeline
-------------------------------------------------------------------------- */

/// Excluded, restricted, sorted and searched list for `criteria`.
#[wasm_bindgen]
pub fn visible_list(criteria: JsValue) -> Result<JsValue, JsValue> {
    let criteria = criteria_from(criteria)?;
    Ok(to_value(&db().visible(&criteria))?)
}

/// Popular countries in dataset order, after exclusion.
#[wasm_bindgen]
pub fn popular_countries(criteria: JsValue) -> Result<JsValue, JsValue> {
    let criteria = criteria_from(criteria)?;
    Ok(to_value(&db().popular(&criteria))?)
}

#[wasm_bindgen]
pub fn search(query: &str, lang: Option<String>) -> Result<JsValue, JsValue> {
    let criteria = FilterCriteria::new(lang.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()))
        .search(query);
    Ok(to_value(&db().visible(&criteria))?)
}

/* --------------------------------------------------------------------------
   Picker
-------------------------------------------------------------------------- */

/// Forwards selections to a JS callback as plain country objects.
struct JsSelectHandler(js_sys::Function);

impl SelectHandler for JsSelectHandler {
    fn on_select(&mut self, record: &CountryRecord) {
        let result = to_value(record)
            .map_err(JsValue::from)
            .and_then(|arg| self.0.call1(&JsValue::NULL, &arg));
        if let Err(err) = result {
            web_sys::console::error_2(&"dialcodes: select callback failed".into(), &err);
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViewJson<'a> {
    language: &'a str,
    placeholder: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    popular: Option<Vec<PickerRow<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    other_countries_title: Option<&'a str>,
    items: Vec<PickerRow<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    empty_message: Option<&'a str>,
}

#[wasm_bindgen]
pub struct Picker {
    inner: DialerPicker<'static, JsSelectHandler>,
}

#[wasm_bindgen]
impl Picker {
    /// `options` follows `PickerOptions` in camelCase; `on_select` receives
    /// the chosen country.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue, on_select: js_sys::Function) -> Result<Picker, JsValue> {
        let options: PickerOptions = if options.is_undefined() || options.is_null() {
            PickerOptions::default()
        } else {
            from_value(options)?
        };
        Ok(Picker {
            inner: DialerPicker::new(db(), options, JsSelectHandler(on_select)),
        })
    }

    pub fn query(&self) -> String {
        self.inner.query().to_string()
    }

    pub fn set_query(&mut self, query: &str) {
        self.inner.set_query(query);
    }

    pub fn clear_query(&mut self) {
        self.inner.clear_query();
    }

    pub fn set_language(&mut self, lang: &str) {
        self.inner.set_language(lang);
    }

    /// Current rows, header and empty message as a plain object.
    pub fn view(&self) -> Result<JsValue, JsValue> {
        let view = self.inner.view();
        let out = ViewJson {
            language: &view.language,
            placeholder: self.inner.placeholder(),
            popular: view.popular.as_ref().map(|_| view.popular_rows().collect()),
            other_countries_title: view
                .popular
                .as_ref()
                .map(|p| p.other_countries_title.as_str()),
            items: view.rows().collect(),
            empty_message: view.empty_message.as_deref(),
        };
        Ok(to_value(&out)?)
    }

    /// Selects `code` and fires the callback. Returns false for codes the
    /// picker does not offer.
    pub fn select(&mut self, code: &str) -> bool {
        self.inner.select(code).is_some()
    }
}
