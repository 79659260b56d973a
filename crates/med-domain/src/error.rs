use thiserror::Error;

/// Errores del dominio de registros de paciente.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid record: missing required field `{0}`")]
    MissingField(&'static str),
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    #[error("unknown missing-field policy: {0}")]
    UnknownPolicy(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::InvalidRecord(e.to_string())
    }
}
