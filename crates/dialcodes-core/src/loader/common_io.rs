// crates/dialcodes-core/src/loader/common_io.rs
use crate::error::{DialCodeError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

/// On-disk dataset flavours, told apart by file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    JsonGz,
    Snapshot,
    SnapshotGz,
}

impl DatasetFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        if name.ends_with(".json.gz") {
            Ok(Self::JsonGz)
        } else if name.ends_with(".json") {
            Ok(Self::Json)
        } else if name.ends_with(".bin.gz") {
            Ok(Self::SnapshotGz)
        } else if name.ends_with(".bin") {
            Ok(Self::Snapshot)
        } else {
            Err(DialCodeError::InvalidData(format!(
                "unrecognised dataset extension: {}",
                path.display()
            )))
        }
    }

    pub fn compression(self) -> CompressionMode {
        match self {
            Self::JsonGz | Self::SnapshotGz => CompressionMode::Gzip,
            Self::Json | Self::Snapshot => CompressionMode::None,
        }
    }
}

/// Opens a file, buffers it, and optionally wraps it in a Gzip decoder.
pub fn open_stream(path: &Path, compression: CompressionMode) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        DialCodeError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    match compression {
        CompressionMode::None => Ok(Box::new(reader)),
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                use flate2::read::GzDecoder;
                Ok(Box::new(GzDecoder::new(reader)))
            }
            #[cfg(not(feature = "compact"))]
            {
                Err(DialCodeError::InvalidData(
                    "Gzip input but 'compact' disabled".into(),
                ))
            }
        }
    }
}
