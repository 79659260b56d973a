//! Canonical JSON: claves ordenadas byte a byte, sin espacios.
//!
//! Es el formato que se ancla en el ledger, así que cualquier cambio aquí
//! invalida todos los hashes ya anclados.

use serde_json::Value;
use std::collections::BTreeMap;

/// Serializa un `Value` a su forma canónica:
/// - Objetos con claves ordenadas (orden de bytes UTF-8)
/// - Sin espacios redundantes
/// - Números en la representación decimal única de `serde_json`
pub fn to_canonical_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Display de Value::String aplica el escape JSON compacto.
        Value::String(_) => value.to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(to_canonical_json).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(map) => {
            let mut tree = BTreeMap::new();
            for (k, v) in map {
                tree.insert(k.as_str(), to_canonical_json(v));
            }
            let items: Vec<String> = tree
                .into_iter()
                .map(|(k, v)| format!("{}:{}", Value::from(k), v))
                .collect();
            format!("{{{}}}", items.join(","))
        }
    }
}
