//! Search and category filters over records and blocks.

use ledgerview_contracts::{AuditRecord, Block};

use crate::display::ActionCategory;

/// Case-insensitive substring match against the record's transaction hash,
/// action, resource id and user id.  An empty term matches every record.
pub fn matches_search(record: &AuditRecord, term: &str) -> bool {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    record.transaction_hash.as_deref().is_some_and(|hash| contains(hash))
        || contains(&record.action)
        || contains(&record.resource_id)
        || contains(&record.user_id)
}

/// Records matching `term`, in input order.
pub fn filter_records(records: &[AuditRecord], term: &str) -> Vec<AuditRecord> {
    records
        .iter()
        .filter(|record| matches_search(record, term))
        .cloned()
        .collect()
}

/// Narrow each block to its matching transactions and drop blocks left
/// empty.
///
/// Block numbers, timestamps and hashes are carried over unchanged; the
/// result is not renumbered.
pub fn filter_blocks(blocks: &[Block], term: &str) -> Vec<Block> {
    blocks
        .iter()
        .filter_map(|block| {
            let transactions: Vec<_> = block
                .transactions
                .iter()
                .filter(|tx| matches_search(&tx.record, term))
                .cloned()
                .collect();

            if transactions.is_empty() {
                return None;
            }

            Some(Block {
                block_number: block.block_number,
                timestamp: block.timestamp,
                transactions,
                hash: block.hash.clone(),
            })
        })
        .collect()
}

/// Records whose action falls in `category`.
///
/// Classifies the repaired action, so swapped records land in the category
/// a reader would expect.
pub fn filter_by_category(records: &[AuditRecord], category: ActionCategory) -> Vec<AuditRecord> {
    records
        .iter()
        .filter(|record| {
            let repaired = crate::repair::repair(record);
            ActionCategory::of(&repaired.display_action) == category
        })
        .cloned()
        .collect()
}
