//! Loading and validating `ViewConfig`.

use std::path::Path;

use tracing::debug;

use ledgerview_contracts::{LedgerError, LedgerResult};
use ledgerview_core::{BlockGrouper, RepairPolicy};

use crate::settings::{ViewConfig, MAX_ACTIVITY_DAYS};

impl ViewConfig {
    /// Parse `s` as TOML and validate the result.
    ///
    /// Returns `LedgerError::ConfigError` if the TOML is malformed, names an
    /// unknown key, or holds an out-of-range value.
    pub fn from_toml_str(s: &str) -> LedgerResult<Self> {
        let config: ViewConfig = toml::from_str(s).map_err(|e| LedgerError::ConfigError {
            reason: format!("failed to parse view config TOML: {}", e),
        })?;
        config.validate()?;
        debug!(
            block_size = config.block_size,
            recent_limit = config.recent_limit,
            activity_days = config.activity_days,
            "view config loaded"
        );
        Ok(config)
    }

    /// Read the file at `path` and parse it as view configuration.
    pub fn from_file(path: &Path) -> LedgerResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| LedgerError::ConfigError {
            reason: format!("failed to read view config '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Reject values the views cannot work with.
    pub fn validate(&self) -> LedgerResult<()> {
        if self.block_size == 0 {
            return Err(LedgerError::ConfigError {
                reason: "block_size must be greater than zero".to_string(),
            });
        }
        if self.activity_days == 0 {
            return Err(LedgerError::ConfigError {
                reason: "activity_days must be greater than zero".to_string(),
            });
        }
        if self.activity_days > MAX_ACTIVITY_DAYS {
            return Err(LedgerError::ConfigError {
                reason: format!(
                    "activity_days must be at most {}, got {}",
                    MAX_ACTIVITY_DAYS, self.activity_days
                ),
            });
        }
        Ok(())
    }

    pub fn repair_policy(&self) -> RepairPolicy {
        RepairPolicy {
            placeholder: self.placeholder.clone(),
            hash_preview_len: self.hash_preview_len,
        }
    }

    /// Build the block grouper this configuration describes.
    pub fn grouper(&self) -> LedgerResult<BlockGrouper> {
        BlockGrouper::with_policy(self.block_size, self.repair_policy())
    }
}
