//! CLI mínima:
//! - `medverify verify --id <ID>`
//! - `medverify verify --attr <FIELD> --value <VALUE>`
//! - `medverify fingerprint --file <record.json> --timestamp <TS> [--strict]`
use med_adapters::{IntegrityStatus, RecordQuery};
use med_domain::{anchor_for, CanonicalRecord, MissingFieldPolicy, PatientRecord};
use serde::Serialize;
use std::path::PathBuf;

use crate::errors::CoreError;

pub const USAGE: &str = "usage:\n  medverify verify --id <ID>\n  medverify verify --attr <FIELD> --value <VALUE>\n  medverify fingerprint --file <record.json> --timestamp <TS> [--strict]";

pub const EXIT_VERIFIED: i32 = 0;
pub const EXIT_TAMPERED: i32 = 1;
pub const EXIT_NOT_VERIFIABLE: i32 = 2;
pub const EXIT_TRANSPORT: i32 = 3;
pub const EXIT_USAGE: i32 = 4;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Verify(RecordQuery),
    Fingerprint { file: PathBuf, timestamp: i64, policy: MissingFieldPolicy },
}

/// Interpreta los argumentos (sin el nombre del programa).
pub fn parse_args(args: &[String]) -> Result<Command, CoreError> {
    let (command, rest) = args.split_first().ok_or_else(|| CoreError::Usage("missing command".into()))?;
    let mut id: Option<String> = None;
    let mut attr: Option<String> = None;
    let mut value: Option<String> = None;
    let mut file: Option<PathBuf> = None;
    let mut timestamp: Option<i64> = None;
    let mut strict = false;
    let mut i = 0;
    while i < rest.len() {
        let flag = rest[i].as_str();
        match flag {
            "--strict" => strict = true,
            "--id" | "--attr" | "--value" | "--file" | "--timestamp" => {
                i += 1;
                let arg = rest.get(i).ok_or_else(|| CoreError::Usage(format!("{flag} needs a value")))?.clone();
                match flag {
                    "--id" => id = Some(arg),
                    "--attr" => attr = Some(arg),
                    "--value" => value = Some(arg),
                    "--file" => file = Some(PathBuf::from(arg)),
                    _ => {
                        timestamp = Some(arg.parse::<i64>().map_err(|_| CoreError::Usage(format!("--timestamp must be an integer, got {arg}")))?);
                    }
                }
            }
            other => return Err(CoreError::Usage(format!("unknown argument {other}"))),
        }
        i += 1;
    }

    match command.as_str() {
        "verify" => match (id, attr, value) {
            (Some(id), None, None) => Ok(Command::Verify(RecordQuery::by_id(id))),
            (None, Some(field), Some(value)) => Ok(Command::Verify(RecordQuery::by_attribute(field, value))),
            _ => Err(CoreError::Usage("verify needs --id, or --attr with --value".into())),
        },
        "fingerprint" => match (file, timestamp) {
            (Some(file), Some(timestamp)) => {
                let policy = if strict { MissingFieldPolicy::Reject } else { MissingFieldPolicy::NullSentinel };
                Ok(Command::Fingerprint { file, timestamp, policy })
            }
            _ => Err(CoreError::Usage("fingerprint needs --file and --timestamp".into())),
        },
        other => Err(CoreError::Usage(format!("unknown command {other}"))),
    }
}

pub fn exit_code(status: IntegrityStatus) -> i32 {
    match status {
        IntegrityStatus::Verified => EXIT_VERIFIED,
        IntegrityStatus::TamperingDetected => EXIT_TAMPERED,
        IntegrityStatus::NotAnchored | IntegrityStatus::InvalidRecord | IntegrityStatus::RecordNotFound => EXIT_NOT_VERIFIABLE,
        IntegrityStatus::LedgerUnreachable | IntegrityStatus::StoreUnreachable => EXIT_TRANSPORT,
    }
}

/// Código de salida para un fallo antes de tener informe: un registro que no
/// se puede canonicalizar es "no verificable"; el resto es uso/config.
pub fn error_exit_code(error: &CoreError) -> i32 {
    match error {
        CoreError::Domain(_) => EXIT_NOT_VERIFIABLE,
        CoreError::Usage(_) | CoreError::Config(_) | CoreError::Io(_) | CoreError::Internal(_) => EXIT_USAGE,
    }
}

/// Salida de `fingerprint`: lo que el camino de escritura debe anclar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FingerprintOutput {
    pub canonical: String,
    pub data_hash: String,
    pub timestamp: i64,
}

pub fn fingerprint_document(raw: &str, timestamp: i64, policy: MissingFieldPolicy) -> Result<FingerprintOutput, CoreError> {
    let document: serde_json::Value = serde_json::from_str(raw).map_err(|e| CoreError::Usage(format!("record file is not JSON: {e}")))?;
    let record = PatientRecord::from_document(document)?;
    let anchored = anchor_for(&record, timestamp, policy)?;
    let canonical = CanonicalRecord::from_record(&record.with_timestamp(timestamp), policy)?.to_canonical_string();
    Ok(FingerprintOutput { canonical, data_hash: anchored.data_hash.to_string(), timestamp: anchored.timestamp })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn parses_verify_variants() {
        assert_eq!(parse_args(&args("verify --id rec-1")).unwrap(), Command::Verify(RecordQuery::by_id("rec-1")));
        assert_eq!(parse_args(&args("verify --attr userId --value auth0|jane")).unwrap(),
                   Command::Verify(RecordQuery::by_attribute("userId", "auth0|jane")));
        assert!(matches!(parse_args(&args("verify")), Err(CoreError::Usage(_))));
        assert!(matches!(parse_args(&args("verify --id a --attr b --value c")), Err(CoreError::Usage(_))));
    }

    #[test]
    fn parses_fingerprint() {
        let cmd = parse_args(&args("fingerprint --file r.json --timestamp 1700000000 --strict")).unwrap();
        assert_eq!(cmd,
                   Command::Fingerprint { file: PathBuf::from("r.json"), timestamp: 1_700_000_000, policy: MissingFieldPolicy::Reject });
        assert!(matches!(parse_args(&args("fingerprint --file r.json --timestamp soon")), Err(CoreError::Usage(_))));
        assert!(matches!(parse_args(&args("fingerprint --file")), Err(CoreError::Usage(_))));
    }

    #[test]
    fn rejects_unknown_input() {
        assert!(matches!(parse_args(&[]), Err(CoreError::Usage(_))));
        assert!(matches!(parse_args(&args("anchor --id x")), Err(CoreError::Usage(_))));
        assert!(matches!(parse_args(&args("verify --id x --verbose")), Err(CoreError::Usage(_))));
    }

    #[test]
    fn exit_codes_separate_tampering_from_transport() {
        assert_eq!(exit_code(IntegrityStatus::Verified), 0);
        assert_eq!(exit_code(IntegrityStatus::TamperingDetected), 1);
        assert_eq!(exit_code(IntegrityStatus::NotAnchored), 2);
        assert_eq!(exit_code(IntegrityStatus::LedgerUnreachable), 3);
    }

    #[test]
    fn invalid_records_exit_as_not_verifiable() {
        let wrong_type = fingerprint_document(r#"{"age":"45"}"#, 1, MissingFieldPolicy::NullSentinel).unwrap_err();
        assert_eq!(error_exit_code(&wrong_type), EXIT_NOT_VERIFIABLE);
        let strict_missing = fingerprint_document(r#"{"firstName":"Jane"}"#, 1, MissingFieldPolicy::Reject).unwrap_err();
        assert_eq!(error_exit_code(&strict_missing), EXIT_NOT_VERIFIABLE);
        assert_eq!(error_exit_code(&CoreError::Usage("x".into())), EXIT_USAGE);
        let missing_env = CoreError::from(med_persistence::PersistenceError::Config("MEDVERIFY_LEDGER_PATH not set".into()));
        assert_eq!(error_exit_code(&missing_env), EXIT_USAGE);
    }

    #[test]
    fn fingerprint_document_matches_reference() {
        let raw = r#"{"firstName":"Jane","lastName":"Doe","contactNumber":"555-0100","gender":"F","cancerType":"Breast","age":45,"email":"jane@example.com","_id":"x"}"#;
        let out = fingerprint_document(raw, 1_700_000_000, MissingFieldPolicy::Reject).unwrap();
        assert_eq!(out.data_hash, "dffdfae47b51d8ace1a4fe752fa1ff64c066afdd1e2b057a32636e6cff23faab");
        assert!(out.canonical.ends_with(r#""timestamp":1700000000}"#));
    }

    #[test]
    fn fingerprint_document_surfaces_domain_errors() {
        assert!(matches!(fingerprint_document("{}", 1, MissingFieldPolicy::Reject), Err(CoreError::Domain(_))));
        assert!(matches!(fingerprint_document("not json", 1, MissingFieldPolicy::Reject), Err(CoreError::Usage(_))));
    }
}
