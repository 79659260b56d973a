//! Errores específicos del core.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CoreError {
    #[error("invalid fingerprint length: expected 64 hex chars, got {0}")] InvalidFingerprintLength(usize),
    #[error("invalid fingerprint: non-hex character in {0:?}")] InvalidFingerprintChar(String),
}
