//! Verificación de fingerprints contra el ledger.
//!
//! Pasos: una lectura del anclaje, merge obligatorio del timestamp del
//! ledger sobre una copia del registro, canonicalización, SHA-256 y
//! comparación. Sin reintentos: si el ledger falla, el error sube tal cual.
use log::{debug, warn};
use med_core::{LedgerClient, VerificationResult};
use med_domain::{fingerprint, MissingFieldPolicy, PatientRecord};

use crate::VerifyError;

pub struct FingerprintVerifier<L> {
    ledger: L,
    policy: MissingFieldPolicy,
}

impl<L: LedgerClient> FingerprintVerifier<L> {
    pub fn new(ledger: L) -> Self {
        Self { ledger, policy: MissingFieldPolicy::default() }
    }

    pub fn with_policy(ledger: L, policy: MissingFieldPolicy) -> Self {
        Self { ledger, policy }
    }

    /// Verifica `record` contra lo anclado para `record_id`.
    ///
    /// Cualquier `timestamp` que traiga `record` se ignora: el hash se
    /// recalcula siempre con el del ledger, que es el que se usó al anclar.
    pub async fn verify(&self, record: &PatientRecord, record_id: &str) -> Result<VerificationResult, VerifyError> {
        let anchored = match self.ledger.get_anchored_record(record_id).await {
            Ok(Some(anchored)) => anchored,
            Ok(None) => {
                debug!("record {record_id} has no ledger anchor");
                return Err(VerifyError::RecordNotAnchored(record_id.to_string()));
            }
            Err(e) => {
                warn!("ledger read for {record_id} failed: {e}");
                return Err(VerifyError::LedgerUnavailable(e));
            }
        };

        let merged = record.with_timestamp(anchored.timestamp);
        let computed = fingerprint(&merged, self.policy)?;
        let result = VerificationResult::compare(anchored.data_hash, computed);
        if result.matched {
            debug!("record {record_id} verified: {}", result.computed_hash);
        } else {
            warn!("record {record_id} mismatch: stored={} computed={}", result.stored_hash, result.computed_hash);
        }
        Ok(result)
    }
}
