//! Headline figures and the recent-activity table.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use ledgerview_contracts::{AuditRecord, RepairedFields};
use ledgerview_core::{repair_with, sort_newest_first, RepairPolicy};

/// Counts shown on the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Every record the source returned.
    pub total: usize,

    /// Distinct actors.
    pub distinct_users: usize,

    /// Distinct raw `resource_id` values.  Approximate: swapped records
    /// contribute their action tag here.
    pub distinct_resources: usize,
}

impl DashboardStats {
    pub fn from_records(records: &[AuditRecord]) -> Self {
        let users: HashSet<&str> = records.iter().map(|r| r.user_id.as_str()).collect();
        let resources: HashSet<&str> = records.iter().map(|r| r.resource_id.as_str()).collect();

        Self {
            total: records.len(),
            distinct_users: users.len(),
            distinct_resources: resources.len(),
        }
    }
}

/// One row of the recent-activity table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentEntry {
    pub record: AuditRecord,
    pub repaired: RepairedFields,
}

/// The newest `limit` records, newest first, each repaired for display.
pub fn recent_activity(
    records: &[AuditRecord],
    limit: usize,
    policy: &RepairPolicy,
) -> Vec<RecentEntry> {
    let mut sorted = records.to_vec();
    sort_newest_first(&mut sorted);

    sorted
        .into_iter()
        .take(limit)
        .map(|record| {
            let repaired = repair_with(&record, policy);
            RecentEntry { record, repaired }
        })
        .collect()
}
