//! Lecturas lentas del ledger con el reloj de tokio pausado: el plazo vence
//! de forma determinista, sin esperas reales.

use async_trait::async_trait;
use med_adapters::{InMemoryDocumentStore, IntegrityError, IntegrityStatus, RecordIntegrityService, RecordQuery, VerifyError};
use med_core::{AnchoredRecord, InMemoryLedger, LedgerClient, LedgerError};
use med_domain::{anchor_for, MissingFieldPolicy, PatientRecord};
use med_persistence::TimedLedger;
use std::time::Duration;

const CREATED_AT: i64 = 1_700_000_000;

/// Ledger que tarda `delay` en contestar.
struct SlowLedger {
    inner: InMemoryLedger,
    delay: Duration,
}

#[async_trait]
impl LedgerClient for SlowLedger {
    async fn get_anchored_record(&self, record_id: &str) -> Result<Option<AnchoredRecord>, LedgerError> {
        tokio::time::sleep(self.delay).await;
        self.inner.get_anchored_record(record_id).await
    }
}

fn jane() -> PatientRecord {
    PatientRecord::new("Jane", "Doe", "555-0100", "F", "Breast", 45, "jane@example.com")
}

fn slow_ledger(delay: Duration) -> SlowLedger {
    let inner = InMemoryLedger::new();
    inner.anchor("rec-1", anchor_for(&jane(), CREATED_AT, MissingFieldPolicy::NullSentinel).unwrap());
    SlowLedger { inner, delay }
}

#[tokio::test(start_paused = true)]
async fn slow_read_times_out() {
    let ledger = TimedLedger::new(slow_ledger(Duration::from_secs(10)), Duration::from_millis(250));
    assert_eq!(ledger.get_anchored_record("rec-1").await, Err(LedgerError::Timeout(250)));
}

#[tokio::test(start_paused = true)]
async fn read_within_deadline_passes_through() {
    let ledger = TimedLedger::new(slow_ledger(Duration::from_millis(100)), Duration::from_millis(250));
    let anchored = ledger.get_anchored_record("rec-1").await.expect("read ok").expect("anchored");
    assert_eq!(anchored.timestamp, CREATED_AT);
    assert_eq!(ledger.get_anchored_record("ghost").await, Ok(None));
}

#[tokio::test(start_paused = true)]
async fn timeout_surfaces_as_ledger_unreachable() {
    let store = InMemoryDocumentStore::new();
    store.put("rec-1", serde_json::to_value(jane()).unwrap());
    let ledger = TimedLedger::new(slow_ledger(Duration::from_secs(10)), Duration::from_millis(250));
    let service = RecordIntegrityService::new(store, ledger);

    let err = service.check(&RecordQuery::by_id("rec-1")).await.unwrap_err();
    assert_eq!(err, IntegrityError::Verify(VerifyError::LedgerUnavailable(LedgerError::Timeout(250))));

    let report = service.report(&RecordQuery::by_id("rec-1")).await;
    assert_eq!(report.status, IntegrityStatus::LedgerUnreachable);
    assert!(report.retryable);
    assert!(report.stored_hash.is_none() && report.computed_hash.is_none());
}
