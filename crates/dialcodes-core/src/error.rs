// crates/dialcodes-core/src/error.rs
use thiserror::Error;

/// Errors raised at the loading boundary (files, snapshots, raw JSON).
///
/// The filter pipeline itself never fails; only getting a dataset into
/// memory can.
#[derive(Debug, Error)]
pub enum DialCodeError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, DialCodeError>;
