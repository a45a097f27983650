// crates/dialcodes-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression) and delegates to the
//! payload parsers (JSON vs. bincode snapshot).
//!
//! The bundled dataset is compiled into the binary and parsed once per
//! process; [`CountryDirectory::bundled`] hands out a shared `&'static`
//! reference to it.

mod common_io;
mod snapshot;

pub use common_io::{CompressionMode, DatasetFormat};
pub use snapshot::SNAPSHOT_FORMAT;

use crate::error::{DialCodeError, Result};
use crate::filter::CodeSet;
use crate::model::convert::from_raw;
use crate::model::CountryDirectory;
use crate::raw::CountriesRaw;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::Path;
use tracing::{debug, error};

/// Version tag of the bundled dataset.
pub const DATASET_VERSION: &str = "2025.10";

static BUNDLED_JSON: &str = include_str!("../../data/dial_codes.json");

static BUNDLED: OnceCell<CountryDirectory> = OnceCell::new();

impl CountryDirectory {
    /// The dataset shipped with the crate, parsed on first use.
    ///
    /// Parsing the embedded asset cannot fail for a released build; if it
    /// ever does, the error is logged and an empty directory is returned.
    pub fn bundled() -> &'static CountryDirectory {
        BUNDLED.get_or_init(|| match Self::from_json_str(BUNDLED_JSON) {
            Ok(db) => {
                debug!(
                    version = DATASET_VERSION,
                    countries = db.len(),
                    "bundled dial-code dataset loaded"
                );
                db
            }
            Err(e) => {
                error!(error = %e, "bundled dial-code dataset is unreadable");
                CountryDirectory::empty()
            }
        })
    }

    /// Parses a JSON document of raw entries (`[{code, dial_code, flag, name}, ...]`).
    ///
    /// `null` yields an empty directory.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: CountriesRaw = serde_json::from_str(json)?;
        Ok(from_raw(raw))
    }

    /// Like [`CountryDirectory::from_json_str`], reading from any stream.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: CountriesRaw = serde_json::from_reader(reader)?;
        Ok(from_raw(raw))
    }

    /// Loads a dataset from disk, optionally keeping only the given codes.
    ///
    /// The format follows the file name: `.json`, `.json.gz`, `.bin` or
    /// `.bin.gz` (gzip variants need the `compact` feature).
    pub fn load_from_path(path: impl AsRef<Path>, filter: Option<&[&str]>) -> Result<Self> {
        let path = path.as_ref();
        let format = DatasetFormat::from_path(path)?;
        debug!(path = %path.display(), ?format, "loading dial-code dataset");

        let reader = common_io::open_stream(path, format.compression())?;
        let db = match format {
            DatasetFormat::Json | DatasetFormat::JsonGz => Self::from_json_reader(reader)?,
            DatasetFormat::Snapshot | DatasetFormat::SnapshotGz => {
                let bytes = read_all(reader)?;
                return Self::from_bytes(&bytes, filter);
            }
        };

        Ok(db.filtered(filter))
    }

    /// Writes a bincode snapshot. Gzip is used when the name ends in `.gz`.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let compression = DatasetFormat::from_path(path)
            .map(|f| f.compression())
            .unwrap_or(CompressionMode::None);
        snapshot::write_snapshot(path, self, compression)
    }

    /// Keeps only records whose code is listed in `filter`.
    ///
    /// `None` or an empty filter keeps everything.
    pub(crate) fn filtered(self, filter: Option<&[&str]>) -> Self {
        let allowed: CodeSet = match filter {
            Some(f) if !f.is_empty() => f.iter().collect(),
            _ => return self,
        };
        let records = self
            .records
            .into_iter()
            .filter(|r| allowed.contains(&r.code))
            .collect();
        Self { records }
    }
}

fn read_all(mut reader: Box<dyn Read>) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(DialCodeError::Io)?;
    Ok(data)
}
