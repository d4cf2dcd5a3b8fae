//! # ledgerview-core
//!
//! The transformation core of ledgerview: audit records in, display blocks
//! out.
//!
//! ## Overview
//!
//! Records fetched from an [`AuditSource`](traits::AuditSource) flow through
//! two pure steps:
//!
//! 1. [`repair`] reads each record's `action` / `resource_id` pair in its
//!    intended roles, undoing the upstream field swap and substituting a
//!    placeholder for withheld resources.
//! 2. [`BlockGrouper`] chunks the sequence into fixed-size, numbered blocks.
//!
//! [`filter_blocks`] then narrows blocks to a search term without
//! renumbering them.  Nothing here holds state or performs I/O; every call
//! is recomputed from its inputs.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ledgerview_core::{filter_blocks, group_into_blocks, summarize};
//!
//! let blocks = group_into_blocks(&records, 3)?;
//! let summary = summarize(&blocks);
//! let hits = filter_blocks(&blocks, "create_patient");
//! ```

pub mod display;
pub mod filter;
pub mod grouper;
pub mod repair;
pub mod traits;

pub use display::{sort_newest_first, ActionCategory};
pub use filter::{filter_blocks, filter_by_category, filter_records, matches_search};
pub use grouper::{group_into_blocks, summarize, BlockGrouper, ChainSummary, DEFAULT_BLOCK_SIZE};
pub use repair::{repair, repair_with, RepairPolicy, WITHHELD_PLACEHOLDER};
pub use traits::AuditSource;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use ledgerview_contracts::{AuditRecord, Block, LedgerError, LedgerResult};

    use super::*;
    use crate::display::{abbreviate_action, preview, preview_data_hash, preview_user};

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Build `n` distinguishable, well-formed records one minute apart.
    fn make_records(n: usize) -> Vec<AuditRecord> {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        (0..n)
            .map(|i| {
                AuditRecord::new(format!("user-{i}"), "CREATE_PATIENT", format!("{}", 100 + i))
                    .with_timestamp(base + Duration::minutes(i as i64))
                    .with_transaction_hash(format!("0xtx{i:04}"))
            })
            .collect()
    }

    fn flatten(blocks: &[Block]) -> Vec<AuditRecord> {
        blocks.iter().flat_map(|b| b.records().cloned()).collect()
    }

    // ── Grouping ──────────────────────────────────────────────────────────────

    /// Seven records at block size three give blocks of 3, 3 and 1.
    #[test]
    fn test_seven_records_make_three_blocks() {
        let records = make_records(7);
        let blocks = group_into_blocks(&records, 3).unwrap();

        assert_eq!(blocks.len(), 3);
        assert_eq!(
            blocks.iter().map(|b| b.block_number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(blocks.iter().map(Block::len).collect::<Vec<_>>(), vec![3, 3, 1]);
        assert_eq!(blocks[0].records().cloned().collect::<Vec<_>>(), records[0..3]);
        assert_eq!(blocks[1].records().cloned().collect::<Vec<_>>(), records[3..6]);
        assert_eq!(blocks[2].records().cloned().collect::<Vec<_>>(), records[6..7]);
    }

    /// Block count is ceil(n / k) and concatenation restores the input.
    #[test]
    fn test_grouping_preserves_count_and_order() {
        for n in 0..20 {
            let records = make_records(n);
            for k in 1..7 {
                let blocks = group_into_blocks(&records, k).unwrap();
                assert_eq!(blocks.len(), n.div_ceil(k), "n={n} k={k}");
                assert!(blocks.iter().all(|b| !b.is_empty() && b.len() <= k));
                assert_eq!(flatten(&blocks), records, "n={n} k={k}");
            }
        }
    }

    #[test]
    fn test_empty_input_gives_no_blocks() {
        let blocks = group_into_blocks(&[], 3).unwrap();
        assert!(blocks.is_empty());
        assert_eq!(summarize(&blocks), ChainSummary::default());
    }

    #[test]
    fn test_zero_block_size_is_invalid_argument() {
        let result = group_into_blocks(&make_records(4), 0);
        assert!(matches!(result, Err(LedgerError::InvalidArgument { .. })));

        assert!(BlockGrouper::new(0).is_err());
    }

    /// The block hash and timestamp come from the block's first record.
    #[test]
    fn test_block_header_comes_from_first_record() {
        let records = make_records(5);
        let blocks = group_into_blocks(&records, 2).unwrap();

        assert_eq!(blocks[1].hash, "0xtx0002");
        assert!(blocks[1].has_hash());
        assert_eq!(Some(blocks[1].timestamp), records[2].timestamp);
        assert_eq!(Some(blocks[2].timestamp), records[4].timestamp);
    }

    #[test]
    fn test_block_without_hash_or_timestamp_uses_fallbacks() {
        let records = vec![
            AuditRecord::new("u", "CREATE_STAFF", "9"),
            AuditRecord::new("u", "UPDATE_STAFF", "9").with_transaction_hash("0xlater"),
        ];

        let before = Utc::now();
        let blocks = group_into_blocks(&records, 3).unwrap();
        let after = Utc::now();

        assert_eq!(blocks[0].hash, Block::HASH_NOT_AVAILABLE);
        assert!(!blocks[0].has_hash());
        assert!(blocks[0].timestamp >= before && blocks[0].timestamp <= after);
    }

    /// Records are repaired as they are placed into blocks.
    #[test]
    fn test_grouping_attaches_repaired_fields() {
        let records = vec![
            AuditRecord::new("u", "0xabcdef0123456789", "CREATE_PATIENT"),
            AuditRecord::new("u", "DELETE_STAFF", "N/A"),
        ];
        let blocks = BlockGrouper::default().group(&records);

        let txs = &blocks[0].transactions;
        assert!(txs[0].repaired.was_swapped);
        assert_eq!(txs[0].repaired.display_action, "CREATE_PATIENT");
        assert_eq!(txs[1].repaired.display_resource, WITHHELD_PLACEHOLDER);
        // The stored record itself is untouched.
        assert_eq!(txs[0].record, records[0]);
    }

    #[test]
    fn test_summarize_counts_blocks_and_transactions() {
        let blocks = group_into_blocks(&make_records(8), 3).unwrap();
        assert_eq!(
            summarize(&blocks),
            ChainSummary {
                block_count: 3,
                transaction_count: 8
            }
        );
    }

    // ── Repair ────────────────────────────────────────────────────────────────

    #[test]
    fn test_repair_swapped_hash_and_action() {
        let record = AuditRecord::new("u", "0xabc1234567890def", "CREATE_PATIENT");
        let repaired = repair(&record);

        assert_eq!(repaired.display_action, "CREATE_PATIENT");
        assert_eq!(repaired.display_resource, "0xabc12345...");
        assert!(repaired.was_swapped);
    }

    #[test]
    fn test_repair_well_formed_record_is_unchanged() {
        let repaired = repair(&AuditRecord::new("u", "CREATE_PATIENT", "42"));

        assert_eq!(repaired.display_action, "CREATE_PATIENT");
        assert_eq!(repaired.display_resource, "42");
        assert!(!repaired.was_swapped);
    }

    #[test]
    fn test_repair_missing_resource_gets_placeholder() {
        let repaired = repair(&AuditRecord::new("u", "DELETE_STAFF", "N/A"));

        assert_eq!(repaired.display_action, "DELETE_STAFF");
        assert_eq!(repaired.display_resource, "Encrypted / Private");
        assert!(!repaired.was_swapped);

        let repaired = repair(&AuditRecord::new("u", "UPDATE_PATIENT", "ERROR"));
        assert_eq!(repaired.display_resource, WITHHELD_PLACEHOLDER);
        assert!(!repaired.was_swapped);
    }

    /// An underscore alone is enough to trigger the swap, and a non-hash
    /// action is used verbatim as the resource.
    #[test]
    fn test_repair_underscore_triggers_swap() {
        let repaired = repair(&AuditRecord::new("u", "patient-77", "LOGIN_ATTEMPT"));

        assert!(repaired.was_swapped);
        assert_eq!(repaired.display_action, "LOGIN_ATTEMPT");
        assert_eq!(repaired.display_resource, "patient-77");
    }

    /// A swapped record whose action slot is missing shows the placeholder.
    #[test]
    fn test_repair_swapped_with_missing_action_slot() {
        let repaired = repair(&AuditRecord::new("u", "N/A", "UPDATE_APPOINTMENT"));

        assert!(repaired.was_swapped);
        assert_eq!(repaired.display_action, "UPDATE_APPOINTMENT");
        assert_eq!(repaired.display_resource, WITHHELD_PLACEHOLDER);
    }

    #[test]
    fn test_repair_both_fields_missing() {
        let repaired = repair(&AuditRecord::new("u", "", ""));

        assert_eq!(repaired.display_action, "");
        assert_eq!(repaired.display_resource, WITHHELD_PLACEHOLDER);
        assert!(!repaired.was_swapped);
    }

    /// Prefix matching is case-sensitive and a plain id never triggers.
    #[test]
    fn test_repair_does_not_swap_plain_ids() {
        assert!(!repair(&AuditRecord::new("u", "CREATE_PATIENT", "create-7")).was_swapped);
        assert!(!repair(&AuditRecord::new("u", "CREATE_PATIENT", "0xfeed")).was_swapped);
    }

    #[test]
    fn test_repair_with_custom_policy() {
        let policy = RepairPolicy {
            placeholder: "-".to_string(),
            hash_preview_len: 4,
        };

        let swapped = repair_with(&AuditRecord::new("u", "0xabcdef", "DELETE_PATIENT"), &policy);
        assert_eq!(swapped.display_resource, "0xab...");

        let withheld = repair_with(&AuditRecord::new("u", "CREATE_PATIENT", ""), &policy);
        assert_eq!(withheld.display_resource, "-");
    }

    // ── Filtering ─────────────────────────────────────────────────────────────

    /// A term matching only record 4 leaves block #2 holding just that record.
    #[test]
    fn test_filter_blocks_keeps_original_numbering() {
        let mut records = make_records(7);
        records[4].user_id = "dr-house".to_string();

        let blocks = group_into_blocks(&records, 3).unwrap();
        let filtered = filter_blocks(&blocks, "DR-HOUSE");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].block_number, 2);
        assert_eq!(filtered[0].hash, blocks[1].hash);
        assert_eq!(filtered[0].records().cloned().collect::<Vec<_>>(), vec![records[4].clone()]);
    }

    #[test]
    fn test_filter_blocks_matches_transaction_hash_case_insensitively() {
        let blocks = group_into_blocks(&make_records(6), 3).unwrap();
        let filtered = filter_blocks(&blocks, "0XTX0005");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].block_number, 2);
        assert_eq!(filtered[0].len(), 1);
    }

    #[test]
    fn test_filter_blocks_empty_term_and_no_match() {
        let blocks = group_into_blocks(&make_records(5), 2).unwrap();

        assert_eq!(filter_blocks(&blocks, ""), blocks);
        assert!(filter_blocks(&blocks, "no-such-value").is_empty());
    }

    #[test]
    fn test_filter_records_searches_action_and_resource() {
        let records = vec![
            AuditRecord::new("alice", "CREATE_PATIENT", "12"),
            AuditRecord::new("bob", "DELETE_STAFF", "99"),
            AuditRecord::new("carol", "UPDATE_PATIENT", "120"),
        ];

        let hits = filter_records(&records, "patient");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].user_id, "alice");
        assert_eq!(hits[1].user_id, "carol");

        let hits = filter_records(&records, "12");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_filter_by_category_uses_repaired_action() {
        let records = vec![
            AuditRecord::new("u", "CREATE_PATIENT", "1"),
            AuditRecord::new("u", "0xfeedface", "DELETE_PATIENT"),
            AuditRecord::new("u", "LOGIN", "2"),
        ];

        let deletes = filter_by_category(&records, ActionCategory::Delete);
        assert_eq!(deletes, vec![records[1].clone()]);

        let others = filter_by_category(&records, ActionCategory::Other);
        assert_eq!(others, vec![records[2].clone()]);
    }

    // ── Display helpers ───────────────────────────────────────────────────────

    #[test]
    fn test_action_category_precedence() {
        assert_eq!(ActionCategory::of("CREATE_PATIENT"), ActionCategory::Create);
        assert_eq!(ActionCategory::of("UPDATE_STAFF"), ActionCategory::Update);
        assert_eq!(ActionCategory::of("BULK_DELETE"), ActionCategory::Delete);
        assert_eq!(ActionCategory::of("CREATE_OR_DELETE"), ActionCategory::Create);
        assert_eq!(ActionCategory::of("LOGIN"), ActionCategory::Other);
        assert_eq!(ActionCategory::Delete.label(), "delete");
    }

    #[test]
    fn test_previews() {
        assert_eq!(preview("0x1234567890abcdef", 10), "0x12345678...");
        assert_eq!(preview("éééééé", 3), "ééé...");
        assert_eq!(abbreviate_action("CREATE_PATIENT"), "CREATE_PATIENT");
        assert_eq!(
            abbreviate_action("CREATE_MEDICAL_RECORD_ENTRY"),
            "CREATE_MED..."
        );
        assert_eq!(preview_user("a1b2c3d4e5f6a7b8"), "a1b2c3d4e5...");

        let with_hash = AuditRecord::new("u", "A", "1")
            .with_data_hash("0x00112233445566778899aabbccddeeff");
        assert_eq!(preview_data_hash(&with_hash), "0x00112233445566778899...");
        assert_eq!(preview_data_hash(&AuditRecord::new("u", "A", "1")), "N/A");
    }

    #[test]
    fn test_sort_newest_first_puts_untimed_last() {
        let mut records = make_records(3);
        records.insert(1, AuditRecord::new("untimed", "CREATE_PATIENT", "0"));

        sort_newest_first(&mut records);

        let users: Vec<_> = records.iter().map(|r| r.user_id.as_str()).collect();
        assert_eq!(users, vec!["user-2", "user-1", "user-0", "untimed"]);
    }

    // ── AuditSource provided methods ──────────────────────────────────────────

    struct FixedSource(Vec<AuditRecord>);

    impl AuditSource for FixedSource {
        fn fetch_all(&self) -> LedgerResult<Vec<AuditRecord>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_source_fetch_by_user_and_resource() {
        let source = FixedSource(vec![
            AuditRecord::new("alice", "CREATE_PATIENT", "12"),
            AuditRecord::new("bob", "UPDATE_PATIENT", "12"),
            AuditRecord::new("alice", "DELETE_STAFF", "7"),
        ]);

        assert_eq!(source.fetch_by_user("alice").unwrap().len(), 2);
        assert_eq!(source.fetch_by_resource("12").unwrap().len(), 2);
        assert!(source.fetch_by_user("").unwrap().is_empty());
        assert!(source.fetch_by_resource("").unwrap().is_empty());
    }
}
