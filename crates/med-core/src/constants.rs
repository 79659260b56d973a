//! Constantes del núcleo de integridad.

/// Longitud en caracteres hex de un digest SHA-256.
pub const FINGERPRINT_HEX_LEN: usize = 64;

/// Prefijo que algunos clientes de ledger anteponen a los hashes (`0x...`).
pub const HEX_PREFIX: &str = "0x";
