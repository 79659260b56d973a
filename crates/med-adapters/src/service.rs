//! Servicio de integridad: store → registro tipado → verificación.
use log::{debug, info};
use med_core::{LedgerClient, VerificationResult};
use med_domain::MissingFieldPolicy;

use crate::{DocumentStore, FingerprintVerifier, IntegrityError, IntegrityReport, RecordQuery, VerifyError};

pub struct RecordIntegrityService<S, L> {
    store: S,
    verifier: FingerprintVerifier<L>,
}

impl<S: DocumentStore, L: LedgerClient> RecordIntegrityService<S, L> {
    pub fn new(store: S, ledger: L) -> Self {
        Self { store, verifier: FingerprintVerifier::new(ledger) }
    }

    pub fn with_policy(store: S, ledger: L, policy: MissingFieldPolicy) -> Self {
        Self { store, verifier: FingerprintVerifier::with_policy(ledger, policy) }
    }

    /// Busca el registro y lo verifica. Devuelve el id resuelto junto al
    /// resultado (con una consulta por atributo el id no se conoce antes).
    pub async fn check(&self, query: &RecordQuery) -> Result<(String, VerificationResult), IntegrityError> {
        let stored = self.store.get(query).await?.ok_or_else(|| IntegrityError::RecordNotFound(query.to_string()))?;
        debug!("resolved {query} to record {}", stored.id);
        let record = stored.patient_record().map_err(VerifyError::from)?;
        let result = self.verifier.verify(&record, &stored.id).await?;
        Ok((stored.id, result))
    }

    /// Igual que `check` pero plegado a un `IntegrityReport` para mostrar.
    pub async fn report(&self, query: &RecordQuery) -> IntegrityReport {
        let report = match self.check(query).await {
            Ok((id, result)) => IntegrityReport::from_result(id, result),
            Err(e) => IntegrityReport::from_error(query.to_string(), &e),
        };
        info!("{report}");
        report
    }
}
