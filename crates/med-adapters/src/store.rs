//! Contrato de lectura del store de documentos (mutable).
use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;
use med_domain::{DomainError, PatientRecord};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::StoreError;

/// Criterio de búsqueda: por identificador o por un atributo secundario
/// (p. ej. el `userId` externo del proveedor de identidad).
#[derive(Debug, Clone, PartialEq)]
pub enum RecordQuery {
    ById(String),
    ByAttribute { field: String, value: Value },
}

impl RecordQuery {
    pub fn by_id(id: impl Into<String>) -> Self {
        RecordQuery::ById(id.into())
    }

    pub fn by_attribute(field: impl Into<String>, value: impl Into<Value>) -> Self {
        RecordQuery::ByAttribute { field: field.into(), value: value.into() }
    }

    /// ¿Coincide `document` (con identificador `id`) con la consulta?
    pub fn matches(&self, id: &str, document: &Value) -> bool {
        match self {
            RecordQuery::ById(wanted) => wanted == id,
            RecordQuery::ByAttribute { field, value } => document.get(field) == Some(value),
        }
    }
}

impl fmt::Display for RecordQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordQuery::ById(id) => write!(f, "id={id}"),
            RecordQuery::ByAttribute { field, value } => write!(f, "{field}={value}"),
        }
    }
}

/// Documento tal como lo devuelve el store, aún sin tipar.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    pub id: String,
    pub document: Value,
}

impl StoredRecord {
    pub fn patient_record(&self) -> Result<PatientRecord, DomainError> {
        PatientRecord::from_store_document(self.document.clone())
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// `Ok(None)` = ningún documento coincide; `Err` = fallo de transporte.
    async fn get(&self, query: &RecordQuery) -> Result<Option<StoredRecord>, StoreError>;
}

#[async_trait]
impl<T: DocumentStore + ?Sized> DocumentStore for Arc<T> {
    async fn get(&self, query: &RecordQuery) -> Result<Option<StoredRecord>, StoreError> {
        (**self).get(query).await
    }
}

/// Store en memoria. A diferencia del ledger, se puede reescribir: así se
/// simula una edición (o manipulación) de los datos tras el anclaje.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    docs: DashMap<String, Value>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserta o reemplaza el documento `id`.
    pub fn put(&self, id: impl Into<String>, document: Value) {
        self.docs.insert(id.into(), document);
    }

    /// Reemplaza un campo de un documento existente. Devuelve `false` si el
    /// documento no existe o no es un objeto.
    pub fn set_field(&self, id: &str, field: &str, value: impl Into<Value>) -> bool {
        match self.docs.get_mut(id) {
            Some(mut doc) => match doc.as_object_mut() {
                Some(obj) => {
                    obj.insert(field.to_string(), value.into());
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, query: &RecordQuery) -> Result<Option<StoredRecord>, StoreError> {
        let found = match query {
            RecordQuery::ById(id) => self.docs.get(id).map(|d| StoredRecord { id: id.clone(), document: d.value().clone() }),
            RecordQuery::ByAttribute { .. } => {
                // El orden de iteración de DashMap no es estable: con varios
                // candidatos se elige el id menor para que la respuesta lo sea.
                let mut hits: Vec<StoredRecord> = self.docs
                                                      .iter()
                                                      .filter(|e| query.matches(e.key(), e.value()))
                                                      .map(|e| StoredRecord { id: e.key().clone(), document: e.value().clone() })
                                                      .collect();
                hits.sort_by(|a, b| a.id.cmp(&b.id));
                hits.into_iter().next()
            }
        };
        debug!("in-memory store lookup {query} found={}", found.is_some());
        Ok(found)
    }
}
