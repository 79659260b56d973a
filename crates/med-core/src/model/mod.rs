pub mod anchored;
pub mod fingerprint;
pub mod verification;

pub use anchored::AnchoredRecord;
pub use fingerprint::Fingerprint;
pub use verification::VerificationResult;
