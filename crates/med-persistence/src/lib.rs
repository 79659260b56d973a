//! med-persistence
//!
//! Implementaciones sobre ficheros JSON de los colaboradores externos del
//! core (`DocumentStore` y `LedgerClient`), más la carga de configuración
//! desde `.env`.
//!
//! Módulos:
//! - `config`: `StoreConfig::from_env`.
//! - `error`: errores de configuración / IO / parseo.
//! - `json_store`: colección de documentos en un fichero JSON.
//! - `json_ledger`: anclajes `{ id: { dataHash, timestamp } }` en un fichero JSON.
//! - `timed_ledger`: plazo máximo para cualquier lectura del ledger.

pub mod config;
pub mod error;
pub mod json_ledger;
pub mod json_store;
pub mod timed_ledger;

pub use config::{init_dotenv, StoreConfig};
pub use error::PersistenceError;
pub use json_ledger::JsonFileLedger;
pub use json_store::JsonFileDocumentStore;
pub use timed_ledger::TimedLedger;
