use med_domain::DomainError;
use med_persistence::PersistenceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error interno: {0}")]
    Internal(String),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de configuración: {0}")]
    Config(#[from] PersistenceError),
    #[error("Registro inválido: {0}")]
    Domain(#[from] DomainError),
    #[error("Uso incorrecto: {0}")]
    Usage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_variant_from() {
        let io_err = std::io::Error::other("falló IO");
        let err: CoreError = io_err.into();
        assert_eq!(err.to_string(), "Error en IO: falló IO");
    }

    #[test]
    fn test_config_variant_from() {
        let err: CoreError = PersistenceError::Config("MEDVERIFY_LEDGER_PATH not set".into()).into();
        assert_eq!(err.to_string(), "Error de configuración: configuration error: MEDVERIFY_LEDGER_PATH not set");
    }

    #[test]
    fn test_domain_variant_from() {
        let err: CoreError = DomainError::MissingField("age").into();
        assert_eq!(err.to_string(), "Registro inválido: invalid record: missing required field `age`");
    }
}
