//! Positional grouping of audit records into display blocks.
//!
//! The grouper does not sort.  Blocks are consecutive, non-overlapping
//! chunks of the input in the order given; a caller that wants newest-first
//! blocks sorts before grouping.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use ledgerview_contracts::{
    AuditRecord, Block, BlockTransaction, LedgerError, LedgerResult,
};

use crate::repair::{repair_with, RepairPolicy};

/// Records per block when nothing else is configured.
pub const DEFAULT_BLOCK_SIZE: usize = 3;

/// Splits record sequences into blocks of a fixed size.
#[derive(Debug, Clone)]
pub struct BlockGrouper {
    block_size: usize,
    policy: RepairPolicy,
}

impl BlockGrouper {
    /// Build a grouper with the default repair policy.
    ///
    /// Returns `LedgerError::InvalidArgument` when `block_size` is zero.
    pub fn new(block_size: usize) -> LedgerResult<Self> {
        Self::with_policy(block_size, RepairPolicy::default())
    }

    pub fn with_policy(block_size: usize, policy: RepairPolicy) -> LedgerResult<Self> {
        if block_size == 0 {
            return Err(LedgerError::InvalidArgument {
                reason: "block size must be greater than zero".to_string(),
            });
        }
        Ok(Self { block_size, policy })
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn policy(&self) -> &RepairPolicy {
        &self.policy
    }

    /// Group `records` into `ceil(len / block_size)` blocks.
    ///
    /// Every block but the last holds exactly `block_size` records; the last
    /// holds the remainder.  Each record is repaired on the way in.  Empty
    /// input gives no blocks.
    pub fn group(&self, records: &[AuditRecord]) -> Vec<Block> {
        let blocks: Vec<Block> = records
            .chunks(self.block_size)
            .enumerate()
            .map(|(index, chunk)| self.build_block(index + 1, chunk))
            .collect();

        debug!(
            record_count = records.len(),
            block_count = blocks.len(),
            block_size = self.block_size,
            "grouped audit records into blocks"
        );

        blocks
    }

    fn build_block(&self, block_number: usize, chunk: &[AuditRecord]) -> Block {
        let first = chunk.first();

        let timestamp = first
            .and_then(|record| record.timestamp)
            .unwrap_or_else(Utc::now);

        let hash = first
            .and_then(|record| record.transaction_hash())
            .unwrap_or(Block::HASH_NOT_AVAILABLE)
            .to_string();

        let transactions = chunk
            .iter()
            .map(|record| BlockTransaction {
                record: record.clone(),
                repaired: repair_with(record, &self.policy),
            })
            .collect();

        Block {
            block_number,
            timestamp,
            transactions,
            hash,
        }
    }
}

impl Default for BlockGrouper {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            policy: RepairPolicy::default(),
        }
    }
}

/// Group `records` into blocks of `block_size` using the default policy.
pub fn group_into_blocks(records: &[AuditRecord], block_size: usize) -> LedgerResult<Vec<Block>> {
    Ok(BlockGrouper::new(block_size)?.group(records))
}

/// Headline figures for a block view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChainSummary {
    pub block_count: usize,
    pub transaction_count: usize,
}

/// Count blocks and the transactions they hold.
pub fn summarize(blocks: &[Block]) -> ChainSummary {
    ChainSummary {
        block_count: blocks.len(),
        transaction_count: blocks.iter().map(Block::len).sum(),
    }
}
