//! Contrato de lectura del ledger inmutable.
//!
//! El core sólo necesita una llamada de lectura (view), nunca una
//! transacción: no hay firma, ni wallet, ni selección de red aquí.
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::model::AnchoredRecord;

pub mod memory;
pub use memory::InMemoryLedger;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("ledger transport failure: {0}")]
    Transport(String),
    #[error("ledger read timed out after {0} ms")]
    Timeout(u64),
    #[error("malformed ledger response: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Devuelve `Ok(None)` si el ledger no tiene entrada para `record_id`.
    async fn get_anchored_record(&self, record_id: &str) -> Result<Option<AnchoredRecord>, LedgerError>;
}

#[async_trait]
impl<T: LedgerClient + ?Sized> LedgerClient for Arc<T> {
    async fn get_anchored_record(&self, record_id: &str) -> Result<Option<AnchoredRecord>, LedgerError> {
        (**self).get_anchored_record(record_id).await
    }
}

#[async_trait]
impl<T: LedgerClient + ?Sized> LedgerClient for Box<T> {
    async fn get_anchored_record(&self, record_id: &str) -> Result<Option<AnchoredRecord>, LedgerError> {
        (**self).get_anchored_record(record_id).await
    }
}
