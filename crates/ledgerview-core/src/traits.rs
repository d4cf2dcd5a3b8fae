//! The collaborator seam between ledgerview and the audit service.
//!
//! Everything upstream of the grouper (HTTP clients, files, fixtures) hides
//! behind `AuditSource`.  The core never performs I/O itself; it is handed
//! the full record sequence and transforms it.

use ledgerview_contracts::{AuditRecord, LedgerResult};

/// A provider of audit records.
///
/// Implementations return the complete, unpaginated record sequence in the
/// order the service delivered it.  No sorting or filtering is expected at
/// the source.
pub trait AuditSource: Send + Sync {
    /// Fetch every audit record the source knows about.
    fn fetch_all(&self) -> LedgerResult<Vec<AuditRecord>>;

    /// Records whose actor is `user_id`.
    ///
    /// An empty `user_id` yields no records rather than every record.
    fn fetch_by_user(&self, user_id: &str) -> LedgerResult<Vec<AuditRecord>> {
        if user_id.is_empty() {
            return Ok(Vec::new());
        }
        let mut records = self.fetch_all()?;
        records.retain(|record| record.user_id == user_id);
        Ok(records)
    }

    /// Records that touched `resource_id`, for example one patient.
    ///
    /// Matches the raw field as stored; a record whose fields arrived
    /// swapped will not match here.
    fn fetch_by_resource(&self, resource_id: &str) -> LedgerResult<Vec<AuditRecord>> {
        if resource_id.is_empty() {
            return Ok(Vec::new());
        }
        let mut records = self.fetch_all()?;
        records.retain(|record| record.resource_id == resource_id);
        Ok(records)
    }
}
