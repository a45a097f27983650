use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a [`crate::CountryDirectory`].
///
/// Returned by [`crate::CountryDirectory::stats`]; counts reflect the
/// directory after any load-time filter was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryStats {
    pub countries: usize,
    /// Distinct language codes across all records.
    pub languages: usize,
    /// Dial codes used by more than one country (`+1`, `+7`, `+44`...).
    pub shared_dial_codes: usize,
}
