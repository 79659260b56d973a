use serde::{Deserialize, Serialize};

use super::Fingerprint;

/// Par hash + timestamp comprometido en el ledger al crear el registro.
/// Desde este crate es de sólo lectura.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchoredRecord {
    pub data_hash: Fingerprint,
    /// Segundos desde epoch, fijados por el ledger.
    pub timestamp: i64,
}

impl AnchoredRecord {
    pub fn new(data_hash: Fingerprint, timestamp: i64) -> Self {
        Self { data_hash, timestamp }
    }
}
