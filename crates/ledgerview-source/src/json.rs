//! JSON-file implementation of `AuditSource`.
//!
//! The file holds a single JSON array of audit records exactly as the audit
//! service's `/logs` endpoint returns them.  The file is re-read on every
//! fetch, so edits show up on the next refresh.

use std::path::{Path, PathBuf};

use tracing::info;

use ledgerview_contracts::{AuditRecord, LedgerError, LedgerResult};
use ledgerview_core::AuditSource;

/// Decode a JSON array body into audit records.
///
/// Returns `LedgerError::MalformedRecords` if `body` is not an array or any
/// element fails to decode.
pub fn parse_records(body: &str) -> LedgerResult<Vec<AuditRecord>> {
    serde_json::from_str(body).map_err(|e| LedgerError::MalformedRecords {
        reason: e.to_string(),
    })
}

/// Reads audit records from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuditSource for JsonFileSource {
    fn fetch_all(&self) -> LedgerResult<Vec<AuditRecord>> {
        let body = std::fs::read_to_string(&self.path).map_err(|e| {
            LedgerError::SourceUnavailable {
                reason: format!("failed to read '{}': {}", self.path.display(), e),
            }
        })?;

        let records = parse_records(&body).map_err(|e| match e {
            LedgerError::MalformedRecords { reason } => LedgerError::MalformedRecords {
                reason: format!("{}: {}", self.path.display(), reason),
            },
            other => other,
        })?;

        info!(
            path = %self.path.display(),
            record_count = records.len(),
            "audit records loaded"
        );
        Ok(records)
    }
}
