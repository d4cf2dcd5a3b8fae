//! Small presentation helpers shared by the block and dashboard views.

use std::cmp::Ordering;

use ledgerview_contracts::{AuditRecord, NOT_AVAILABLE};

const ELLIPSIS: &str = "...";

/// Actions longer than this are abbreviated in tables.
pub const ACTION_DISPLAY_MAX: usize = 20;

/// Characters kept when an action is abbreviated.
pub const ACTION_PREVIEW_LEN: usize = 10;

/// Characters kept from a user id.
pub const USER_PREVIEW_LEN: usize = 10;

/// Characters kept from a data hash.
pub const DATA_HASH_PREVIEW_LEN: usize = 22;

/// First `len` characters of `value` followed by `...`.
///
/// Counts characters, not bytes, so multi-byte input never splits.
pub fn preview(value: &str, len: usize) -> String {
    let mut out: String = value.chars().take(len).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Shorten an action for table display.
pub fn abbreviate_action(action: &str) -> String {
    if action.chars().count() > ACTION_DISPLAY_MAX {
        preview(action, ACTION_PREVIEW_LEN)
    } else {
        action.to_string()
    }
}

pub fn preview_user(user_id: &str) -> String {
    preview(user_id, USER_PREVIEW_LEN)
}

/// Shortened data hash, or `N/A` when the record has none.
pub fn preview_data_hash(record: &AuditRecord) -> String {
    match record.data_hash.as_deref() {
        Some(hash) if !hash.is_empty() => preview(hash, DATA_HASH_PREVIEW_LEN),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Coarse classification of an action tag, used for colour coding and the
/// category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionCategory {
    Create,
    Update,
    Delete,
    Other,
}

impl ActionCategory {
    /// Classify `action` by substring.  `CREATE` wins over `DELETE`, which
    /// wins over `UPDATE`.
    pub fn of(action: &str) -> Self {
        if action.contains("CREATE") {
            Self::Create
        } else if action.contains("DELETE") {
            Self::Delete
        } else if action.contains("UPDATE") {
            Self::Update
        } else {
            Self::Other
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Other => "other",
        }
    }
}

/// Sort newest first, in place.
///
/// Stable: records with equal timestamps keep their relative order.
/// Records without a timestamp go last.
pub fn sort_newest_first(records: &mut [AuditRecord]) {
    records.sort_by(|a, b| match (a.timestamp, b.timestamp) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
