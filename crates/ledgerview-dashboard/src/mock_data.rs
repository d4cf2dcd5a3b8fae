//! Fictional audit records for demos and tests.
//!
//! All data here is generated and fictional.  The generator is
//! deterministic: the same `count` and `start` always produce the same
//! records.  It deliberately reproduces the audit service's quirks: every
//! third record arrives with `action` and `resource_id` swapped, and every
//! fifth withholds its resource as `N/A`.

use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};

use ledgerview_contracts::{AuditRecord, NOT_AVAILABLE};

const ACTIONS: [&str; 6] = [
    "CREATE_PATIENT",
    "UPDATE_PATIENT",
    "CREATE_APPOINTMENT",
    "UPDATE_MEDICAL_RECORD",
    "DELETE_APPOINTMENT",
    "DELETE_STAFF",
];

const USERS: usize = 4;

/// Minutes between consecutive generated records.
const SPACING_MINUTES: i64 = 17;

/// `0x`-prefixed SHA-256 of `input`, as the ledger would report it.
pub fn ledger_hash(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("0x{}", hex::encode(hasher.finalize()))
}

/// Pseudonymous actor id: the first 16 hex chars of a SHA-256.
fn pseudonym(index: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("staff-{index}").as_bytes());
    hex::encode(hasher.finalize())[..16].to_string()
}

/// Generate `count` records starting at `start`, one every 17 minutes.
pub fn sample_records(count: usize, start: DateTime<Utc>) -> Vec<AuditRecord> {
    (0..count)
        .map(|i| {
            let action = ACTIONS[i % ACTIONS.len()];
            let patient = format!("{}", 1000 + i % 7);
            let data_hash = ledger_hash(&format!("{action}:{patient}:{i}"));

            let resource = if i % 5 == 4 {
                NOT_AVAILABLE.to_string()
            } else {
                patient
            };

            let base = if i % 3 == 1 {
                AuditRecord::new(pseudonym(i % USERS), data_hash.clone(), action)
            } else {
                AuditRecord::new(pseudonym(i % USERS), action, resource)
            };

            base.with_timestamp(start + Duration::minutes(SPACING_MINUTES * i as i64))
                .with_data_hash(data_hash)
                .with_transaction_hash(ledger_hash(&format!("tx-{i}")))
        })
        .collect()
}
