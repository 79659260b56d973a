//! Resultado de integridad listo para la capa de presentación.
use med_core::{Fingerprint, VerificationResult};
use serde::Serialize;
use std::fmt;

use crate::{IntegrityError, VerifyError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrityStatus {
    Verified,
    TamperingDetected,
    NotAnchored,
    LedgerUnreachable,
    InvalidRecord,
    RecordNotFound,
    StoreUnreachable,
}

impl IntegrityStatus {
    pub fn message(&self) -> &'static str {
        match self {
            IntegrityStatus::Verified => "Data verified: the record matches its ledger anchor",
            IntegrityStatus::TamperingDetected => "Tampering detected: the record differs from its ledger anchor",
            IntegrityStatus::NotAnchored => "Not verifiable: no anchored record exists on the ledger",
            IntegrityStatus::LedgerUnreachable => "Could not reach the ledger; try again",
            IntegrityStatus::InvalidRecord => "Record cannot be canonicalized for verification",
            IntegrityStatus::RecordNotFound => "No matching patient record",
            IntegrityStatus::StoreUnreachable => "Could not reach the record store; try again",
        }
    }

    /// Fallos de transporte: tiene sentido reintentar la llamada completa.
    pub fn retryable(&self) -> bool {
        matches!(self, IntegrityStatus::LedgerUnreachable | IntegrityStatus::StoreUnreachable)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityReport {
    pub record: String,
    pub status: IntegrityStatus,
    pub message: &'static str,
    pub retryable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_hash: Option<Fingerprint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_hash: Option<Fingerprint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl IntegrityReport {
    fn build(record: String, status: IntegrityStatus) -> Self {
        IntegrityReport { record,
                          status,
                          message: status.message(),
                          retryable: status.retryable(),
                          stored_hash: None,
                          computed_hash: None,
                          detail: None }
    }

    pub fn from_result(record: impl Into<String>, result: VerificationResult) -> Self {
        let status = if result.matched { IntegrityStatus::Verified } else { IntegrityStatus::TamperingDetected };
        let mut report = Self::build(record.into(), status);
        report.stored_hash = Some(result.stored_hash);
        report.computed_hash = Some(result.computed_hash);
        report
    }

    /// Sin hashes: ante un error no se inventa ninguno.
    pub fn from_error(record: impl Into<String>, error: &IntegrityError) -> Self {
        let status = match error {
            IntegrityError::RecordNotFound(_) => IntegrityStatus::RecordNotFound,
            IntegrityError::StoreUnavailable(_) => IntegrityStatus::StoreUnreachable,
            IntegrityError::Verify(VerifyError::RecordNotAnchored(_)) => IntegrityStatus::NotAnchored,
            IntegrityError::Verify(VerifyError::LedgerUnavailable(_)) => IntegrityStatus::LedgerUnreachable,
            IntegrityError::Verify(VerifyError::InvalidRecord(_)) => IntegrityStatus::InvalidRecord,
        };
        let mut report = Self::build(record.into(), status);
        report.detail = Some(error.to_string());
        report
    }
}

impl fmt::Display for IntegrityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.record, self.message)?;
        if let Some(stored) = &self.stored_hash {
            write!(f, " stored={stored}")?;
        }
        if let Some(computed) = &self.computed_hash {
            write!(f, " computed={computed}")?;
        }
        if let Some(detail) = &self.detail {
            write!(f, " ({detail})")?;
        }
        Ok(())
    }
}
