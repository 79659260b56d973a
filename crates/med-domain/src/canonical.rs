//! Canonicalización de registros de paciente.
//!
//! Proyecta el registro sobre los ocho campos anclados, ordena las claves y
//! serializa con `med_core::hashing::to_canonical_json`. El mismo camino lo
//! usan la escritura (anclaje) y la verificación.
use med_core::hashing::to_canonical_json;
use med_core::{AnchoredRecord, Fingerprint};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::{DomainError, PatientRecord};

/// Campos que participan en el hash, ya en orden lexicográfico de bytes.
pub const CANONICAL_FIELDS: [&str; 8] =
    ["age", "cancerType", "contactNumber", "email", "firstName", "gender", "lastName", "timestamp"];

/// Qué hacer con un campo ausente.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingFieldPolicy {
    /// Serializa el campo como `null`.
    #[default]
    NullSentinel,
    /// Falla con `DomainError::MissingField`.
    Reject,
}

impl FromStr for MissingFieldPolicy {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "null" | "sentinel" => Ok(MissingFieldPolicy::NullSentinel),
            "reject" | "strict" => Ok(MissingFieldPolicy::Reject),
            other => Err(DomainError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Forma canónica: exactamente los ocho campos, claves ordenadas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRecord {
    fields: BTreeMap<&'static str, Value>,
}

impl CanonicalRecord {
    pub fn from_record(record: &PatientRecord, policy: MissingFieldPolicy) -> Result<Self, DomainError> {
        let projected: [(&'static str, Option<Value>); 8] = [
            ("age", record.age.map(Value::from)),
            ("cancerType", record.cancer_type.clone().map(Value::from)),
            ("contactNumber", record.contact_number.clone().map(Value::from)),
            ("email", record.email.clone().map(Value::from)),
            ("firstName", record.first_name.clone().map(Value::from)),
            ("gender", record.gender.clone().map(Value::from)),
            ("lastName", record.last_name.clone().map(Value::from)),
            ("timestamp", record.timestamp.map(Value::from)),
        ];
        let mut fields = BTreeMap::new();
        for (name, value) in projected {
            let value = match (value, policy) {
                (Some(v), _) => v,
                (None, MissingFieldPolicy::NullSentinel) => Value::Null,
                (None, MissingFieldPolicy::Reject) => return Err(DomainError::MissingField(name)),
            };
            fields.insert(name, value);
        }
        Ok(CanonicalRecord { fields })
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn to_canonical_string(&self) -> String {
        let object: Map<String, Value> = self.fields.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();
        to_canonical_json(&Value::Object(object))
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_canonical_string().into_bytes()
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(self.to_canonical_string().as_bytes())
    }
}

/// Bytes canónicos (UTF-8) de `record`.
pub fn canonicalize(record: &PatientRecord, policy: MissingFieldPolicy) -> Result<Vec<u8>, DomainError> {
    Ok(CanonicalRecord::from_record(record, policy)?.to_bytes())
}

/// SHA-256 de la forma canónica de `record`, tal como está (sin merge).
pub fn fingerprint(record: &PatientRecord, policy: MissingFieldPolicy) -> Result<Fingerprint, DomainError> {
    Ok(CanonicalRecord::from_record(record, policy)?.fingerprint())
}

/// Lo que el camino de escritura debe anclar para `record` creado en
/// `timestamp`. Comparte formato con la verificación.
pub fn anchor_for(record: &PatientRecord, timestamp: i64, policy: MissingFieldPolicy) -> Result<AnchoredRecord, DomainError> {
    let data_hash = fingerprint(&record.with_timestamp(timestamp), policy)?;
    Ok(AnchoredRecord::new(data_hash, timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> PatientRecord {
        PatientRecord::new("Jane", "Doe", "555-0100", "F", "Breast", 45, "jane@example.com").with_timestamp(1_700_000_000)
    }

    #[test]
    fn fields_constant_is_sorted() {
        let mut sorted = CANONICAL_FIELDS;
        sorted.sort_unstable();
        assert_eq!(sorted, CANONICAL_FIELDS);
    }

    #[test]
    fn canonical_string_has_fixed_shape() {
        let c = CanonicalRecord::from_record(&jane(), MissingFieldPolicy::NullSentinel).expect("canonical");
        assert_eq!(c.to_canonical_string(),
                   r#"{"age":45,"cancerType":"Breast","contactNumber":"555-0100","email":"jane@example.com","firstName":"Jane","gender":"F","lastName":"Doe","timestamp":1700000000}"#);
    }

    #[test]
    fn missing_field_becomes_null_sentinel() {
        let mut rec = jane();
        rec.age = None;
        let c = CanonicalRecord::from_record(&rec, MissingFieldPolicy::NullSentinel).expect("canonical");
        assert_eq!(c.get("age"), Some(&Value::Null));
        assert!(c.to_canonical_string().starts_with(r#"{"age":null,"cancerType""#));
    }

    #[test]
    fn missing_field_rejected_under_strict_policy() {
        let mut rec = jane();
        rec.email = None;
        assert_eq!(CanonicalRecord::from_record(&rec, MissingFieldPolicy::Reject), Err(DomainError::MissingField("email")));
        assert_eq!(canonicalize(&PatientRecord::default(), MissingFieldPolicy::Reject), Err(DomainError::MissingField("age")));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let plain = canonicalize(&jane(), MissingFieldPolicy::NullSentinel).unwrap();
        let noisy = canonicalize(&jane().with_extra("_id", "65a1").with_extra("userId", "auth0|1"), MissingFieldPolicy::NullSentinel).unwrap();
        assert_eq!(plain, noisy);
    }

    #[test]
    fn anchor_for_merges_timestamp() {
        let bare = PatientRecord::new("Jane", "Doe", "555-0100", "F", "Breast", 45, "jane@example.com");
        let anchored = anchor_for(&bare, 1_700_000_000, MissingFieldPolicy::Reject).expect("anchor");
        assert_eq!(anchored.timestamp, 1_700_000_000);
        assert_eq!(anchored.data_hash, fingerprint(&jane(), MissingFieldPolicy::Reject).unwrap());
    }

    #[test]
    fn policy_parses_from_config_strings() {
        assert_eq!("null".parse::<MissingFieldPolicy>(), Ok(MissingFieldPolicy::NullSentinel));
        assert_eq!(" Reject ".parse::<MissingFieldPolicy>(), Ok(MissingFieldPolicy::Reject));
        assert!(matches!("drop".parse::<MissingFieldPolicy>(), Err(DomainError::UnknownPolicy(_))));
    }
}
