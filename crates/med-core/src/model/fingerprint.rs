use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{FINGERPRINT_HEX_LEN, HEX_PREFIX};
use crate::errors::CoreError;
use crate::hashing::hash_bytes;

/// Digest SHA-256 en hex minúscula (64 caracteres).
///
/// Sólo se construye vía `of` (calculado localmente) o `from_hex` (leído de
/// un ledger), de modo que dos fingerprints iguales siempre comparan igual
/// como strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Calcula el fingerprint de una secuencia de bytes canónica.
    pub fn of(bytes: &[u8]) -> Self {
        Fingerprint(hash_bytes(bytes))
    }

    /// Valida un hash externo. Acepta prefijo `0x` y mayúsculas; normaliza a
    /// hex minúscula sin prefijo.
    pub fn from_hex(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        let hex = match trimmed.get(..HEX_PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(HEX_PREFIX) => &trimmed[HEX_PREFIX.len()..],
            _ => trimmed,
        };
        if hex.len() != FINGERPRINT_HEX_LEN {
            return Err(CoreError::InvalidFingerprintLength(hex.len()));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CoreError::InvalidFingerprintChar(raw.to_string()));
        }
        Ok(Fingerprint(hex.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Fingerprint {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fingerprint::from_hex(s)
    }
}

impl TryFrom<String> for Fingerprint {
    type Error = CoreError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Fingerprint::from_hex(&value)
    }
}

impl From<Fingerprint> for String {
    fn from(fp: Fingerprint) -> Self {
        fp.0
    }
}
