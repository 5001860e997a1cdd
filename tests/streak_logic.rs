//! Tests for the consecutive-day streak scan, including the midnight rule:
//! a day with no activity yet only breaks the streak once it is in the past.

use chrono::{Duration, NaiveDate, Utc};
use std::collections::HashSet;
use studybuddy_progress::database::models::{ActivityRecord, ActivityType};
use studybuddy_progress::progress::streak::{active_days, current_streak};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn days(dates: &[NaiveDate]) -> HashSet<NaiveDate> {
    dates.iter().copied().collect()
}

#[test]
fn empty_log_has_no_streak() {
    let today = day(2026, 3, 15);
    assert_eq!(current_streak(&HashSet::new(), today), 0);
}

#[test]
fn single_day_today() {
    let today = day(2026, 3, 15);
    assert_eq!(current_streak(&days(&[today]), today), 1);
}

#[test]
fn missing_today_does_not_zero_yesterdays_streak() {
    let today = day(2026, 3, 15);
    let set = days(&[today - Duration::days(1), today - Duration::days(2)]);
    assert_eq!(current_streak(&set, today), 2);
}

#[test]
fn missing_today_and_yesterday_is_zero() {
    let today = day(2026, 3, 15);
    let set = days(&[today - Duration::days(2)]);
    assert_eq!(current_streak(&set, today), 0);
}

#[test]
fn stops_at_the_first_gap_after_today() {
    // dates = {today, today-1, today-3} -> the gap at today-2 ends the scan.
    let today = day(2026, 3, 15);
    let set = days(&[today, today - Duration::days(1), today - Duration::days(3)]);
    assert_eq!(current_streak(&set, today), 2);
}

#[test]
fn streak_is_recursively_consistent() {
    // With today and yesterday both active, evaluating from today counts one
    // more day than evaluating from yesterday.
    let today = day(2026, 3, 15);
    let set = days(&[today, today - Duration::days(1), today - Duration::days(2)]);
    let yesterday = today - Duration::days(1);
    assert_eq!(current_streak(&set, today), 1 + current_streak(&set, yesterday));
}

#[test]
fn lookback_window_bounds_the_streak() {
    let today = day(2026, 3, 15);
    let long_run: Vec<NaiveDate> = (0..40).map(|i| today - Duration::days(i)).collect();
    assert_eq!(current_streak(&days(&long_run), today), 30);
}

fn record(activity_date: &str) -> ActivityRecord {
    ActivityRecord {
        activity_id: 0,
        owner: "sam@example.edu".into(),
        activity_type: ActivityType::AiChat,
        activity_date: activity_date.into(),
        details: None,
        created_at: Utc::now(),
    }
}

#[test]
fn active_days_dedupes_repeated_days() {
    let log = vec![record("2026-03-14"), record("2026-03-14"), record("2026-03-15")];
    assert_eq!(active_days(&log).len(), 2);
}

#[test]
fn active_days_skips_unparseable_dates() {
    let log = vec![record("2026-03-15"), record("someday"), record("")];
    let set = active_days(&log);
    assert_eq!(set.len(), 1);
    assert!(set.contains(&day(2026, 3, 15)));
}
