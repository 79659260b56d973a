use serde::{Deserialize, Serialize};

use super::Fingerprint;

/// Resultado de una verificación. Un `matched == false` no es un error: es
/// el aviso de que los datos del store ya no coinciden con lo anclado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub matched: bool,
    pub stored_hash: Fingerprint,
    pub computed_hash: Fingerprint,
}

impl VerificationResult {
    pub fn compare(stored_hash: Fingerprint, computed_hash: Fingerprint) -> Self {
        let matched = stored_hash == computed_hash;
        Self { matched, stored_hash, computed_hash }
    }
}
