//! Carga de configuración desde variables de entorno.
//! Convención `MEDVERIFY_*`; el `.env` se carga una sola vez.

use med_domain::MissingFieldPolicy;
use once_cell::sync::Lazy;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::PersistenceError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

pub const RECORDS_PATH_VAR: &str = "MEDVERIFY_RECORDS_PATH";
pub const LEDGER_PATH_VAR: &str = "MEDVERIFY_LEDGER_PATH";
pub const ID_FIELD_VAR: &str = "MEDVERIFY_ID_FIELD";
pub const LEDGER_TIMEOUT_VAR: &str = "MEDVERIFY_LEDGER_TIMEOUT_MS";
pub const MISSING_FIELDS_VAR: &str = "MEDVERIFY_MISSING_FIELDS";

pub const DEFAULT_ID_FIELD: &str = "_id";
pub const DEFAULT_LEDGER_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub records_path: PathBuf,
    pub ledger_path: PathBuf,
    pub id_field: String,
    pub ledger_timeout: Duration,
    pub missing_field_policy: MissingFieldPolicy,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, PersistenceError> {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de una función de búsqueda; útil
    /// para tests sin tocar el entorno del proceso.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PersistenceError>
        where F: Fn(&str) -> Option<String>
    {
        let required = |key: &str| lookup(key).filter(|v| !v.trim().is_empty()).ok_or_else(|| PersistenceError::Config(format!("{key} not set")));
        let records_path = PathBuf::from(required(RECORDS_PATH_VAR)?);
        let ledger_path = PathBuf::from(required(LEDGER_PATH_VAR)?);
        let id_field = match lookup(ID_FIELD_VAR) {
            Some(raw) if raw.trim().is_empty() => return Err(PersistenceError::Config(format!("{ID_FIELD_VAR} is empty"))),
            Some(raw) => raw.trim().to_string(),
            None => DEFAULT_ID_FIELD.to_string(),
        };
        let timeout_ms = match lookup(LEDGER_TIMEOUT_VAR) {
            Some(raw) => raw.trim()
                            .parse::<u64>()
                            .map_err(|e| PersistenceError::Config(format!("{LEDGER_TIMEOUT_VAR}={raw}: {e}")))?,
            None => DEFAULT_LEDGER_TIMEOUT_MS,
        };
        if timeout_ms == 0 {
            return Err(PersistenceError::Config(format!("{LEDGER_TIMEOUT_VAR} must be greater than 0")));
        }
        let missing_field_policy = match lookup(MISSING_FIELDS_VAR) {
            Some(raw) => raw.parse::<MissingFieldPolicy>().map_err(|e| PersistenceError::Config(format!("{MISSING_FIELDS_VAR}: {e}")))?,
            None => MissingFieldPolicy::default(),
        };
        Ok(Self { records_path,
                  ledger_path,
                  id_field,
                  ledger_timeout: Duration::from_millis(timeout_ms),
                  missing_field_policy })
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() { Lazy::force(&DOTENV_LOADED); }
