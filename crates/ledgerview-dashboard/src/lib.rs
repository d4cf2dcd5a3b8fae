//! # ledgerview-dashboard
//!
//! Aggregates behind the ledgerview dashboard: headline counts, the
//! recent-activity table, and the per-day activity chart.  Also hosts the
//! fictional record generator used by the demo.
//!
//! Like the core, everything here is a pure function of the fetched records
//! and is recomputed on every refresh.

pub mod activity;
pub mod mock_data;
pub mod stats;

pub use activity::{daily_activity, DailyCount};
pub use stats::{recent_activity, DashboardStats, RecentEntry};

// ── Tests ─────────────────────────────────────────────────────────────────────
