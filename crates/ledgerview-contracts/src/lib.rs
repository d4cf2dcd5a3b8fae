//! # ledgerview-contracts
//!
//! Shared types for the ledgerview audit visualizer.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions, lenient decoding, and error types.

pub mod block;
pub mod error;
pub mod record;

pub use block::{Block, BlockTransaction, RepairedFields};
pub use error::{LedgerError, LedgerResult};
pub use record::{is_missing, parse_timestamp, AuditRecord, NOT_AVAILABLE};
