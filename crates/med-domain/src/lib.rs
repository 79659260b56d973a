// med-domain library entry point
pub mod canonical;
pub mod error;
pub mod patient_record;
pub use canonical::{anchor_for, canonicalize, fingerprint, CanonicalRecord, MissingFieldPolicy, CANONICAL_FIELDS};
pub use error::DomainError;
pub use patient_record::PatientRecord;
