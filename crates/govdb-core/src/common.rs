use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the dataset.
///
/// Returned by [`GovDb::stats`](crate::GovDb::stats), these counts reflect
/// the in-memory dataset after any id filter applied at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub countries: usize,
    /// Distinct region labels present.
    pub regions: usize,
    /// Distinct approach labels present.
    pub approaches: usize,
    /// Countries whose headline policy is actively enforced.
    pub active_enforcement: usize,
}
