// crates/dialcodes-core/src/loader/snapshot.rs
use super::common_io::CompressionMode;
use crate::error::{DialCodeError, Result};
use crate::model::{CountryDirectory, CountryRecord};
use bincode::Options;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Bumped whenever the serialized record layout changes.
pub const SNAPSHOT_FORMAT: u32 = 1;

/// Upper bound for snapshot payloads; the full dataset is a few dozen KiB.
const SNAPSHOT_LIMIT: u64 = 16 * 1024 * 1024;

// Same options on both sides, otherwise varint/fixint encodings disagree.
fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

impl CountryDirectory {
    /// Serializes the directory into a bincode snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let payload: (u32, &Vec<CountryRecord>) = (SNAPSHOT_FORMAT, &self.records);
        Ok(options().serialize(&payload)?)
    }

    /// Reconstructs a directory from [`CountryDirectory::to_bytes`] output,
    /// optionally keeping only the given codes.
    pub fn from_bytes(data: &[u8], filter: Option<&[&str]>) -> Result<Self> {
        let (format, records): (u32, Vec<CountryRecord>) = options().deserialize(data)?;
        if format != SNAPSHOT_FORMAT {
            return Err(DialCodeError::InvalidData(format!(
                "snapshot format {format}, expected {SNAPSHOT_FORMAT}"
            )));
        }
        Ok(Self::from_records(records).filtered(filter))
    }
}

/// Writes the snapshot of `db` to `path`.
pub(super) fn write_snapshot(
    path: &Path,
    db: &CountryDirectory,
    compression: CompressionMode,
) -> Result<()> {
    let bytes = db.to_bytes()?;
    let file = File::create(path).map_err(DialCodeError::Io)?;
    let writer = BufWriter::new(file);

    let mut encoder: Box<dyn Write> = match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                use flate2::{write::GzEncoder, Compression};
                Box::new(GzEncoder::new(writer, Compression::default()))
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(DialCodeError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => Box::new(writer),
    };

    encoder.write_all(&bytes).map_err(DialCodeError::Io)?;
    encoder.flush().map_err(DialCodeError::Io)?;
    debug!(path = %path.display(), bytes = bytes.len(), "snapshot written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_preserves_records() {
        let db = CountryDirectory::bundled();
        let bytes = db.to_bytes().unwrap();
        let back = CountryDirectory::from_bytes(&bytes, None).unwrap();
        assert_eq!(back.records(), db.records());
    }

    #[test]
    fn wrong_format_is_rejected() {
        let bytes = options()
            .serialize(&(SNAPSHOT_FORMAT + 1, Vec::<CountryRecord>::new()))
            .unwrap();
        let err = CountryDirectory::from_bytes(&bytes, None).unwrap_err();
        assert!(matches!(err, DialCodeError::InvalidData(_)));
    }

    #[test]
    fn garbage_is_a_bincode_error() {
        let err = CountryDirectory::from_bytes(&[], None).unwrap_err();
        assert!(matches!(err, DialCodeError::Bincode(_)));
    }
}
