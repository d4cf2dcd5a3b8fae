//! View configuration schema.
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration.
//!
//! Example:
//! ```toml
//! block_size = 4
//! placeholder = "Withheld"
//! hash_preview_len = 12
//! recent_limit = 10
//! activity_days = 14
//! ```

use serde::{Deserialize, Serialize};

use ledgerview_core::{
    grouper::DEFAULT_BLOCK_SIZE,
    repair::{HASH_PREVIEW_LEN, WITHHELD_PLACEHOLDER},
};

/// Rows shown in the dashboard's recent-activity table.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Days covered by the dashboard's activity chart.
pub const DEFAULT_ACTIVITY_DAYS: u32 = 7;

/// Longest activity chart the dashboard will draw.
pub const MAX_ACTIVITY_DAYS: u32 = 366;

/// Display settings shared by the block, search, and dashboard views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// Records per block.  Must be greater than zero.
    pub block_size: usize,

    /// Shown in place of a withheld or missing resource.
    pub placeholder: String,

    /// Characters kept when abbreviating a `0x` resource hash.
    pub hash_preview_len: usize,

    /// Rows in the recent-activity table.
    pub recent_limit: usize,

    /// Days in the activity chart.  Between 1 and `MAX_ACTIVITY_DAYS`.
    pub activity_days: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            placeholder: WITHHELD_PLACEHOLDER.to_string(),
            hash_preview_len: HASH_PREVIEW_LEN,
            recent_limit: DEFAULT_RECENT_LIMIT,
            activity_days: DEFAULT_ACTIVITY_DAYS,
        }
    }
}
