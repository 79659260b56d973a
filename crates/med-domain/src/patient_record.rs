use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::DomainError;

/// Registro de paciente tipado. Los ocho campos que participan en el hash
/// son explícitos; cualquier otro campo del documento queda en `extra` y se
/// ignora al canonicalizar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancer_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Lo fija el ledger, nunca el store ni el reloj local.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PatientRecord {
    pub fn new(first_name: &str,
               last_name: &str,
               contact_number: &str,
               gender: &str,
               cancer_type: &str,
               age: i64,
               email: &str)
               -> Self {
        PatientRecord { first_name: Some(first_name.to_string()),
                        last_name: Some(last_name.to_string()),
                        contact_number: Some(contact_number.to_string()),
                        gender: Some(gender.to_string()),
                        cancer_type: Some(cancer_type.to_string()),
                        age: Some(age),
                        email: Some(email.to_string()),
                        timestamp: None,
                        extra: Map::new() }
    }

    /// Convierte un documento dinámico (tal como sale del store) en un
    /// registro tipado. Un campo con tipo incorrecto (p. ej. `age: "45"` o
    /// `age: 45.5`) es `InvalidRecord`; un campo ausente o `null` queda en
    /// `None` y lo resuelve la `MissingFieldPolicy` al canonicalizar.
    pub fn from_document(document: Value) -> Result<Self, DomainError> {
        if !document.is_object() {
            return Err(DomainError::InvalidRecord("document is not a JSON object".into()));
        }
        Ok(serde_json::from_value(document)?)
    }

    /// Como `from_document`, pero descarta el `timestamp` que traiga el
    /// store (fecha ISO, `{"$date": ...}`, float...). Ese valor nunca entra
    /// en el hash: la verificación usa siempre el del ledger.
    pub fn from_store_document(mut document: Value) -> Result<Self, DomainError> {
        if let Value::Object(fields) = &mut document {
            fields.remove("timestamp");
        }
        Self::from_document(document)
    }

    /// Copia con el timestamp dado; el original no se toca.
    pub fn with_timestamp(&self, timestamp: i64) -> Self {
        let mut merged = self.clone();
        merged.timestamp = Some(timestamp);
        merged
    }

    pub fn with_extra(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }
}

impl fmt::Display for PatientRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "<{} {}, {}>",
               self.first_name.as_deref().unwrap_or("?"),
               self.last_name.as_deref().unwrap_or("?"),
               self.cancer_type.as_deref().unwrap_or("?"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_document_keeps_extra_fields_apart() {
        let doc = json!({
            "_id": "abc",
            "userId": "auth0|1",
            "firstName": "Jane",
            "age": 45
        });
        let rec = PatientRecord::from_document(doc).expect("valid document");
        assert_eq!(rec.first_name.as_deref(), Some("Jane"));
        assert_eq!(rec.age, Some(45));
        assert_eq!(rec.last_name, None);
        assert_eq!(rec.extra.get("userId"), Some(&json!("auth0|1")));
        assert!(!rec.extra.contains_key("firstName"));
    }

    #[test]
    fn test_explicit_null_is_absent() {
        let rec = PatientRecord::from_document(json!({ "email": null })).expect("valid");
        assert_eq!(rec.email, None);
    }

    #[test]
    fn test_wrong_types_are_invalid() {
        assert!(matches!(PatientRecord::from_document(json!({ "age": "45" })), Err(DomainError::InvalidRecord(_))));
        assert!(matches!(PatientRecord::from_document(json!({ "age": 45.5 })), Err(DomainError::InvalidRecord(_))));
        assert!(matches!(PatientRecord::from_document(json!({ "gender": 1 })), Err(DomainError::InvalidRecord(_))));
        assert!(matches!(PatientRecord::from_document(json!(["not", "an", "object"])), Err(DomainError::InvalidRecord(_))));
    }

    #[test]
    fn test_store_timestamp_is_dropped() {
        let doc = json!({ "firstName": "Jane", "timestamp": "2023-11-14T22:13:20Z" });
        assert!(matches!(PatientRecord::from_document(doc.clone()), Err(DomainError::InvalidRecord(_))));
        let rec = PatientRecord::from_store_document(doc).expect("store timestamp ignored");
        assert_eq!(rec.timestamp, None);
        assert!(!rec.extra.contains_key("timestamp"));
        assert_eq!(rec.first_name.as_deref(), Some("Jane"));
    }

    #[test]
    fn test_with_timestamp_does_not_mutate_original() {
        let rec = PatientRecord::new("Jane", "Doe", "555-0100", "F", "Breast", 45, "jane@example.com");
        let merged = rec.with_timestamp(1_700_000_000);
        assert_eq!(rec.timestamp, None);
        assert_eq!(merged.timestamp, Some(1_700_000_000));
    }

    #[test]
    fn test_display() {
        let rec = PatientRecord::new("Jane", "Doe", "555-0100", "F", "Breast", 45, "jane@example.com");
        assert_eq!(rec.to_string(), "<Jane Doe, Breast>");
    }
}
