//! med-adapters: composición Dominio ↔ Core.
//!
//! Este crate provee:
//! - `FingerprintVerifier`: lee el anclaje del ledger, hace el merge del
//!   timestamp, recalcula el hash y compara.
//! - `DocumentStore`: contrato de lectura del store mutable (por id o por
//!   atributo secundario) y una implementación en memoria.
//! - `RecordIntegrityService`: store → registro tipado → verificación.
//! - `IntegrityReport`: el resultado listo para mostrar/auditar.
//!
//! Nota: aquí no hay estado compartido mutable; cada verificación es una
//! función pura de sus entradas más una lectura externa.

pub mod errors;
pub mod report;
pub mod service;
pub mod store;
pub mod verifier;

pub use errors::{IntegrityError, StoreError, VerifyError};
pub use report::{IntegrityReport, IntegrityStatus};
pub use service::RecordIntegrityService;
pub use store::{DocumentStore, InMemoryDocumentStore, RecordQuery, StoredRecord};
pub use verifier::FingerprintVerifier;
