//! Field-order repair for audit records.
//!
//! The audit service sometimes writes the operation tag into `resource_id`
//! and the resource (usually a `0x` hash) into `action`.  `repair` detects
//! that shape and produces display fields in the intended roles.  It is a
//! rendering shim only: never feed its output into access-control or
//! persistence decisions.
//!
//! Decision rule, first match wins:
//!
//! 1. `resource_id` is present and either starts with `CREATE`, `UPDATE` or
//!    `DELETE`, or contains `_` → swapped.  The action is shown as the
//!    resource id; the resource is shown as the action, abbreviated when it
//!    is a `0x` hash.
//! 2. Otherwise the fields are shown as stored.
//!
//! In both cases a missing display resource becomes the withheld
//! placeholder.

use ledgerview_contracts::{is_missing, AuditRecord, RepairedFields};

use crate::display::preview;

/// Operation-tag prefixes that mark a value as an action.
pub const ACTION_PREFIXES: [&str; 3] = ["CREATE", "UPDATE", "DELETE"];

/// Shown in place of a resource the service withheld or failed to produce.
pub const WITHHELD_PLACEHOLDER: &str = "Encrypted / Private";

/// Characters of a `0x` hash kept when abbreviating it.
pub const HASH_PREVIEW_LEN: usize = 10;

/// Tunables for the repair step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairPolicy {
    /// Replacement for a missing display resource.
    pub placeholder: String,

    /// Characters kept when a swapped `0x` resource is abbreviated.
    pub hash_preview_len: usize,
}

impl Default for RepairPolicy {
    fn default() -> Self {
        Self {
            placeholder: WITHHELD_PLACEHOLDER.to_string(),
            hash_preview_len: HASH_PREVIEW_LEN,
        }
    }
}

/// Return true if `resource_id` looks like it holds an action instead.
pub fn looks_like_action(resource_id: &str) -> bool {
    if is_missing(resource_id) {
        return false;
    }
    ACTION_PREFIXES
        .iter()
        .any(|prefix| resource_id.starts_with(prefix))
        || resource_id.contains('_')
}

/// Repair `record` with the default placeholder and preview length.
pub fn repair(record: &AuditRecord) -> RepairedFields {
    repair_with(record, &RepairPolicy::default())
}

/// Repair `record` according to `policy`.
///
/// Total over all inputs: a record with neither field usable comes back as
/// `(original action, placeholder, false)`.
pub fn repair_with(record: &AuditRecord, policy: &RepairPolicy) -> RepairedFields {
    let (display_action, display_resource, was_swapped) = if looks_like_action(&record.resource_id)
    {
        let resource = if record.action.starts_with("0x") {
            preview(&record.action, policy.hash_preview_len)
        } else {
            record.action.clone()
        };
        (record.resource_id.clone(), resource, true)
    } else {
        (record.action.clone(), record.resource_id.clone(), false)
    };

    let display_resource = if is_missing(&display_resource) {
        policy.placeholder.clone()
    } else {
        display_resource
    };

    RepairedFields {
        display_action,
        display_resource,
        was_swapped,
    }
}
