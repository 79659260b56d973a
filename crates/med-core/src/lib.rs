//! med-core: hashing canónico, fingerprints y contrato de lectura del ledger.
//!
//! Este crate no conoce el modelo de paciente; sólo expone las piezas
//! neutrales que el dominio y los adaptadores componen.
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod ledger;
pub mod model;

pub use errors::CoreError;
pub use ledger::{InMemoryLedger, LedgerClient, LedgerError};
pub use model::{AnchoredRecord, Fingerprint, VerificationResult};
