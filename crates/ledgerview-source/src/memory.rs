//! In-memory implementation of `AuditSource`.
//!
//! `InMemoryAuditSource` keeps records in a `Vec` behind an
//! `Arc<Mutex<_>>`, so a test or demo can keep appending while views fetch
//! snapshots.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use ledgerview_contracts::{AuditRecord, LedgerError, LedgerResult};
use ledgerview_core::AuditSource;

/// An append-only record store that serves snapshots to the views.
///
/// Clones share the same underlying records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditSource {
    pub(crate) records: Arc<Mutex<Vec<AuditRecord>>>,
}

impl InMemoryAuditSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source pre-loaded with `records`, in order.
    pub fn with_records(records: Vec<AuditRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    /// Every accessor below returns `Err(SourceUnavailable)` only if the
    /// internal mutex is poisoned.
    fn lock(&self) -> LedgerResult<MutexGuard<'_, Vec<AuditRecord>>> {
        self.records.lock().map_err(|e| LedgerError::SourceUnavailable {
            reason: format!("record store lock poisoned: {}", e),
        })
    }

    /// Append one record.
    pub fn push(&self, record: AuditRecord) -> LedgerResult<()> {
        self.lock()?.push(record);
        Ok(())
    }

    pub fn len(&self) -> LedgerResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> LedgerResult<bool> {
        Ok(self.lock()?.is_empty())
    }
}

impl AuditSource for InMemoryAuditSource {
    /// Return a snapshot of every record appended so far.
    fn fetch_all(&self) -> LedgerResult<Vec<AuditRecord>> {
        let records = self.lock()?;

        debug!(record_count = records.len(), "in-memory audit fetch");
        Ok(records.clone())
    }
}
