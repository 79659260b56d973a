//! Hash helpers sobre SHA-256, devueltos en hex minúscula.

use serde_json::Value;
use sha2::{Digest, Sha256};

use super::to_canonical_json;

/// Hashea bytes arbitrarios y devuelve hex.
pub fn hash_bytes(input: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input);
    format!("{:x}", hasher.finalize())
}

/// Hashea un string (bytes UTF-8) y devuelve hex.
pub fn hash_str(input: &str) -> String {
    hash_bytes(input.as_bytes())
}

/// Canonicaliza un `Value` y hashea el resultado.
pub fn hash_value(value: &Value) -> String {
    hash_str(&to_canonical_json(value))
}
