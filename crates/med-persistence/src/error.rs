//! Errores de persistencia.
//! Se traducen a `StoreError` / `LedgerError` en la frontera con el core.

use med_adapters::StoreError;
use med_core::LedgerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("io error on {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("parse error in {path}: {message}")]
    Parse { path: String, message: String },
}

impl From<PersistenceError> for StoreError {
    fn from(err: PersistenceError) -> Self {
        match &err {
            PersistenceError::Parse { .. } => StoreError::Corrupt(err.to_string()),
            _ => StoreError::Transport(err.to_string()),
        }
    }
}

impl From<PersistenceError> for LedgerError {
    fn from(err: PersistenceError) -> Self {
        match &err {
            PersistenceError::Parse { .. } => LedgerError::Malformed(err.to_string()),
            _ => LedgerError::Transport(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_map_to_corruption() {
        let err = PersistenceError::Parse { path: "x.json".into(), message: "eof".into() };
        assert_eq!(StoreError::from(err), StoreError::Corrupt("parse error in x.json: eof".into()));
    }

    #[test]
    fn io_errors_map_to_transport() {
        let err = PersistenceError::Io { path: "l.json".into(), source: std::io::Error::other("gone") };
        assert_eq!(LedgerError::from(err), LedgerError::Transport("io error on l.json: gone".into()));
    }
}
