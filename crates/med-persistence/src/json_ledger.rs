//! Ledger de sólo lectura respaldado por un fichero JSON:
//! `{ "<recordId>": { "dataHash": "<hex64>", "timestamp": <int> } }`.
//!
//! Impone el timeout de lectura; el core no tiene timeouts propios.
use async_trait::async_trait;
use log::{debug, warn};
use med_core::{AnchoredRecord, LedgerClient, LedgerError};
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::time::Duration;

use crate::timed_ledger::bounded_read;
use crate::PersistenceError;

pub struct JsonFileLedger {
    path: PathBuf,
    timeout: Duration,
}

impl JsonFileLedger {
    pub fn new(path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self { path: path.into(), timeout }
    }

    async fn read_entries(&self) -> Result<Map<String, Value>, PersistenceError> {
        let display = self.path.display().to_string();
        let raw = tokio::fs::read_to_string(&self.path).await
                                                       .map_err(|source| PersistenceError::Io { path: display.clone(), source })?;
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(entries)) => Ok(entries),
            Ok(_) => Err(PersistenceError::Parse { path: display, message: "expected an object keyed by record id".into() }),
            Err(e) => Err(PersistenceError::Parse { path: display, message: e.to_string() }),
        }
    }

    async fn lookup(&self, record_id: &str) -> Result<Option<AnchoredRecord>, LedgerError> {
        let mut entries = self.read_entries().await?;
        match entries.remove(record_id) {
            None => Ok(None),
            Some(entry) => {
                // Un hash inválido es una respuesta corrupta, no "sin anclaje".
                let anchored: AnchoredRecord = serde_json::from_value(entry).map_err(|e| {
                                                                             LedgerError::Malformed(format!("entry {record_id}: {e}"))
                                                                         })?;
                Ok(Some(anchored))
            }
        }
    }
}

#[async_trait]
impl LedgerClient for JsonFileLedger {
    async fn get_anchored_record(&self, record_id: &str) -> Result<Option<AnchoredRecord>, LedgerError> {
        let result = bounded_read(self.timeout, self.lookup(record_id)).await;
        match &result {
            Err(e) => warn!("ledger file {} read failed: {e}", self.path.display()),
            Ok(found) => debug!("ledger file lookup id={record_id} found={}", found.is_some()),
        }
        result
    }
}
