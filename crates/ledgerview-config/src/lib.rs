//! # ledgerview-config
//!
//! TOML view configuration for ledgerview.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use ledgerview_config::ViewConfig;
//!
//! let config = ViewConfig::from_file(Path::new("ledgerview.toml"))?;
//! let blocks = config.grouper()?.group(&records);
//! ```
//!
//! Missing keys fall back to their defaults; unknown keys are rejected so a
//! typo does not silently revert a setting.

pub mod loader;
pub mod settings;

pub use settings::ViewConfig;

// ── Tests ─────────────────────────────────────────────────────────────────────
