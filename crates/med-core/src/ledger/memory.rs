use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::debug;

use super::{LedgerClient, LedgerError};
use crate::model::AnchoredRecord;

/// Ledger en memoria (tests, demos). Respeta la semántica write-once del
/// ledger real: un id ya anclado no se puede reescribir.
#[derive(Default)]
pub struct InMemoryLedger {
    entries: DashMap<String, AnchoredRecord>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ancla `record` bajo `record_id`. Devuelve `false` si ya existía una
    /// entrada (la original se conserva).
    pub fn anchor(&self, record_id: impl Into<String>, record: AnchoredRecord) -> bool {
        match self.entries.entry(record_id.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl LedgerClient for InMemoryLedger {
    async fn get_anchored_record(&self, record_id: &str) -> Result<Option<AnchoredRecord>, LedgerError> {
        let found = self.entries.get(record_id).map(|e| e.value().clone());
        debug!("in-memory ledger lookup id={record_id} found={}", found.is_some());
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Fingerprint;

    #[tokio::test]
    async fn anchor_is_write_once() {
        let ledger = InMemoryLedger::new();
        let first = AnchoredRecord::new(Fingerprint::of(b"first"), 10);
        let second = AnchoredRecord::new(Fingerprint::of(b"second"), 20);
        assert!(ledger.anchor("rec-1", first.clone()));
        assert!(!ledger.anchor("rec-1", second));
        assert_eq!(ledger.len(), 1);
        let got = ledger.get_anchored_record("rec-1").await.expect("read ok");
        assert_eq!(got, Some(first));
    }

    #[tokio::test]
    async fn unknown_id_is_none_not_error() {
        let ledger = InMemoryLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.get_anchored_record("missing").await, Ok(None));
    }
}
