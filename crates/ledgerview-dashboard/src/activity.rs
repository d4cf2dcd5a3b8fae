//! Per-day activity counts for the dashboard chart.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use ledgerview_contracts::{AuditRecord, LedgerError, LedgerResult};

/// Records logged on one calendar day (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub count: usize,
}

/// Count records per UTC day for the `days` days ending at `today`.
///
/// The result is oldest first and always holds exactly `days` entries, with
/// zero counts for quiet days.  Records without a timestamp, or outside the
/// window, are ignored.  `days == 0`, or a window reaching back past the
/// earliest representable date, is an `InvalidArgument`.
pub fn daily_activity(
    records: &[AuditRecord],
    today: NaiveDate,
    days: u32,
) -> LedgerResult<Vec<DailyCount>> {
    if days == 0 {
        return Err(LedgerError::InvalidArgument {
            reason: "activity window must cover at least one day".to_string(),
        });
    }

    let mut per_day: HashMap<NaiveDate, usize> = HashMap::new();
    for timestamp in records.iter().filter_map(|r| r.timestamp) {
        *per_day.entry(timestamp.date_naive()).or_default() += 1;
    }

    let window: Vec<DailyCount> = (0..days)
        .rev()
        .map(|offset| -> LedgerResult<DailyCount> {
            let date = today
                .checked_sub_signed(Duration::days(i64::from(offset)))
                .ok_or_else(|| LedgerError::InvalidArgument {
                    reason: format!("activity window of {days} days ending {today} is out of range"),
                })?;
            Ok(DailyCount {
                date,
                weekday: date.weekday(),
                count: per_day.get(&date).copied().unwrap_or(0),
            })
        })
        .collect::<LedgerResult<_>>()?;

    debug!(
        days,
        counted = window.iter().map(|d| d.count).sum::<usize>(),
        "daily activity computed"
    );

    Ok(window)
}
