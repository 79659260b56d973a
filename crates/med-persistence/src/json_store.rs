//! Colección de documentos en un fichero JSON (array de objetos).
//!
//! El fichero se relee en cada consulta: el store es mutable y una edición
//! posterior al anclaje debe verse en la siguiente verificación.
use async_trait::async_trait;
use log::{debug, warn};
use med_adapters::{DocumentStore, RecordQuery, StoreError, StoredRecord};
use serde_json::Value;
use std::path::PathBuf;

use crate::PersistenceError;

pub struct JsonFileDocumentStore {
    path: PathBuf,
    id_field: String,
}

impl JsonFileDocumentStore {
    pub fn new(path: impl Into<PathBuf>, id_field: impl Into<String>) -> Self {
        Self { path: path.into(), id_field: id_field.into() }
    }

    async fn load(&self) -> Result<Vec<Value>, PersistenceError> {
        let display = self.path.display().to_string();
        let raw = tokio::fs::read_to_string(&self.path).await
                                                       .map_err(|source| PersistenceError::Io { path: display.clone(), source })?;
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(docs)) => Ok(docs),
            Ok(_) => Err(PersistenceError::Parse { path: display, message: "expected a JSON array of documents".into() }),
            Err(e) => Err(PersistenceError::Parse { path: display, message: e.to_string() }),
        }
    }

    /// Identificador del documento: string, número, o `{"$oid": "..."}`
    /// (export extendido de Mongo).
    fn document_id(&self, document: &Value) -> Option<String> {
        match document.get(&self.id_field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Object(obj) => obj.get("$oid").and_then(Value::as_str).map(str::to_string),
            _ => None,
        }
    }
}

#[async_trait]
impl DocumentStore for JsonFileDocumentStore {
    async fn get(&self, query: &RecordQuery) -> Result<Option<StoredRecord>, StoreError> {
        let docs = self.load().await?;
        for document in docs {
            let Some(id) = self.document_id(&document) else {
                warn!("skipping document without usable `{}` in {}", self.id_field, self.path.display());
                continue;
            };
            if query.matches(&id, &document) {
                debug!("json store hit {query} -> {id}");
                return Ok(Some(StoredRecord { id, document }));
            }
        }
        debug!("json store miss {query}");
        Ok(None)
    }
}
