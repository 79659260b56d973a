//! Límite de tiempo para lecturas del ledger.
//!
//! `TimedLedger` envuelve cualquier `LedgerClient`; `JsonFileLedger` usa la
//! misma función `bounded_read` sobre su lectura de fichero.
use async_trait::async_trait;
use log::warn;
use med_core::{AnchoredRecord, LedgerClient, LedgerError};
use std::future::Future;
use std::time::Duration;

/// Ejecuta `read` con un plazo máximo; al vencer devuelve `Timeout` y la
/// lectura pendiente se descarta (no escribe nada).
pub async fn bounded_read<F>(timeout: Duration, read: F) -> Result<Option<AnchoredRecord>, LedgerError>
    where F: Future<Output = Result<Option<AnchoredRecord>, LedgerError>>
{
    match tokio::time::timeout(timeout, read).await {
        Ok(result) => result,
        Err(_) => {
            let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
            warn!("ledger read exceeded {millis} ms");
            Err(LedgerError::Timeout(millis))
        }
    }
}

pub struct TimedLedger<L> {
    inner: L,
    timeout: Duration,
}

impl<L: LedgerClient> TimedLedger<L> {
    pub fn new(inner: L, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl<L: LedgerClient> LedgerClient for TimedLedger<L> {
    async fn get_anchored_record(&self, record_id: &str) -> Result<Option<AnchoredRecord>, LedgerError> {
        bounded_read(self.timeout, self.inner.get_anchored_record(record_id)).await
    }
}
