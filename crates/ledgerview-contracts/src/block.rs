//! Display-only block types.
//!
//! A `Block` is a fixed-size slice of the audit record sequence, dressed up
//! with a number and a hash so the log can be drawn as a chain.  It has no
//! relation to any real ledger block and is recomputed on every fetch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::AuditRecord;

/// The display-ready reading of a record's `action` / `resource_id` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairedFields {
    /// What to show as the action.  May still be a missing value when the
    /// record carried none; callers render that distinctly.
    pub display_action: String,

    /// What to show as the resource.  Never missing: absent values are
    /// replaced by the withheld placeholder.
    pub display_resource: String,

    /// True when the two fields were detected as swapped and exchanged.
    pub was_swapped: bool,
}

/// A record placed in a block, paired with its repaired display fields.
///
/// The original record is kept untouched so that concatenating every
/// block's records reproduces the input sequence exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTransaction {
    pub record: AuditRecord,
    pub repaired: RepairedFields,
}

/// A fixed-size grouping of consecutive audit records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// 1-based position of this block in the full grouping.  Preserved when
    /// blocks are filtered, so "Block #7" always names the same slice.
    pub block_number: usize,

    /// Timestamp of the first record, or the grouping time if that record
    /// has none.
    pub timestamp: DateTime<Utc>,

    /// Records in input order.  Never longer than the block size.
    pub transactions: Vec<BlockTransaction>,

    /// Transaction hash of the first record, or `HASH_NOT_AVAILABLE`.
    pub hash: String,
}

impl Block {
    /// Sentinel `hash` for blocks whose first record has no transaction hash.
    pub const HASH_NOT_AVAILABLE: &'static str = crate::record::NOT_AVAILABLE;

    /// Number of transactions in this block.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Iterate over the original records in this block.
    pub fn records(&self) -> impl Iterator<Item = &AuditRecord> {
        self.transactions.iter().map(|tx| &tx.record)
    }

    /// True if the block hash is a real transaction hash.
    pub fn has_hash(&self) -> bool {
        self.hash != Self::HASH_NOT_AVAILABLE
    }
}
