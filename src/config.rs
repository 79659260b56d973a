//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone `AppConfig`, que el binario
//! usa para construir el store y el ledger sobre ficheros JSON.
use med_adapters::RecordIntegrityService;
use med_persistence::{JsonFileDocumentStore, JsonFileLedger, StoreConfig};
use std::env;

use crate::errors::CoreError;

/// Filtro de logs por defecto si `RUST_LOG` no está definido.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuración global de la aplicación.
pub struct AppConfig {
    /// Rutas y parámetros de los colaboradores.
    pub store: StoreConfig,
    /// Directiva para `tracing_subscriber::EnvFilter`.
    pub log_filter: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, CoreError> {
        med_persistence::init_dotenv();
        let store = StoreConfig::from_env()?;
        let log_filter = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
        Ok(AppConfig { store, log_filter })
    }

    /// Construye el servicio de integridad sobre los ficheros configurados.
    pub fn integrity_service(&self) -> RecordIntegrityService<JsonFileDocumentStore, JsonFileLedger> {
        let store = JsonFileDocumentStore::new(&self.store.records_path, self.store.id_field.clone());
        let ledger = JsonFileLedger::new(&self.store.ledger_path, self.store.ledger_timeout);
        RecordIntegrityService::with_policy(store, ledger, self.store.missing_field_policy)
    }
}
