//! Taxonomía de fallos de verificación.
//!
//! Un mismatch NO aparece aquí: es un `VerificationResult` con
//! `matched == false`.

use med_core::LedgerError;
use med_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error(transparent)]
    InvalidRecord(#[from] DomainError),
    #[error("record {0} is not anchored on the ledger")]
    RecordNotAnchored(String),
    #[error("ledger unavailable: {0}")]
    LedgerUnavailable(#[from] LedgerError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("document store transport failure: {0}")]
    Transport(String),
    #[error("corrupt document collection: {0}")]
    Corrupt(String),
}

/// Fallos del servicio completo (store + verificación). Los de verificación
/// se envuelven sin transformar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("no record matches {0}")]
    RecordNotFound(String),
    #[error("document store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
    #[error(transparent)]
    Verify(#[from] VerifyError),
}
