//! # ledgerview-source
//!
//! Reference [`AuditSource`] implementations for ledgerview.
//!
//! - [`InMemoryAuditSource`]: a shared, append-only `Vec` for tests and
//!   demos.
//! - [`JsonFileSource`]: a JSON array on disk, shaped like the audit
//!   service's response body.
//!
//! Views that must keep rendering when the source fails call
//! [`fetch_or_empty`], which logs the failure and hands back zero records.

pub mod json;
pub mod memory;

use tracing::warn;

use ledgerview_contracts::AuditRecord;
use ledgerview_core::AuditSource;

pub use json::{parse_records, JsonFileSource};
pub use memory::InMemoryAuditSource;

/// Fetch every record, or an empty sequence if the source fails.
pub fn fetch_or_empty(source: &dyn AuditSource) -> Vec<AuditRecord> {
    match source.fetch_all() {
        Ok(records) => records,
        Err(e) => {
            warn!(error = %e, "audit fetch failed; rendering zero records");
            Vec::new()
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
