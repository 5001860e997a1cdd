//! Consecutive-day streak derivation over the activity log.

use crate::constants::STREAK_WINDOW_DAYS;
use crate::database::models::ActivityRecord;
use chrono::{Duration, NaiveDate};
use std::collections::HashSet;

/// Collects the distinct calendar days the log covers.
///
/// Activity dates are stored as `YYYY-MM-DD` text; rows whose date does not
/// parse are skipped so one bad legacy record cannot sink the whole
/// computation.
pub fn active_days(records: &[ActivityRecord]) -> HashSet<NaiveDate> {
    records
        .iter()
        .filter_map(|r| NaiveDate::parse_from_str(&r.activity_date, "%Y-%m-%d").ok())
        .collect()
}

/// Computes the current consecutive-day streak, counting backward from `today`.
///
/// A missing day at offset 0 does not end the scan: a user who has not acted
/// yet today still sees yesterday's streak rather than a reset at midnight.
/// Any later gap ends it. The scan is bounded by [`STREAK_WINDOW_DAYS`].
pub fn current_streak(days: &HashSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    for offset in 0..STREAK_WINDOW_DAYS {
        let check_date = today - Duration::days(offset);
        if days.contains(&check_date) {
            streak += 1;
        } else if offset > 0 {
            break;
        }
    }
    streak
}
