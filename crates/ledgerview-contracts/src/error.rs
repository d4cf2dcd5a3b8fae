//! Error types for the ledgerview crates.
//!
//! Only programmer errors and collaborator failures surface here.  Data
//! quality problems inside individual records (missing or swapped fields)
//! are absorbed by the repair step and never become errors.

use thiserror::Error;

/// The unified error type for ledgerview.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A caller passed an argument outside its valid domain, such as a block
    /// size of zero.  Treat as a programming error, not a user-facing one.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// The audit source could not be reached or read.
    #[error("audit source unavailable: {reason}")]
    SourceUnavailable { reason: String },

    /// The audit source answered, but the payload is not a sequence of
    /// audit records.
    #[error("malformed audit records: {reason}")]
    MalformedRecords { reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the ledgerview crates.
pub type LedgerResult<T> = Result<T, LedgerError>;
