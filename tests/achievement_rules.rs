//! Tests for the achievement rule table and its pure evaluator.

use chrono::{Duration, NaiveDate, Utc};
use std::collections::HashSet;
use studybuddy_progress::database::models::{ActivityRecord, ActivityType};
use studybuddy_progress::progress::achievements::{AchievementRule, ActivityTally, RULES, newly_qualified};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).expect("valid date")
}

fn record(activity_type: ActivityType, activity_date: NaiveDate) -> ActivityRecord {
    ActivityRecord {
        activity_id: 0,
        owner: "sam@example.edu".into(),
        activity_type,
        activity_date: activity_date.format("%Y-%m-%d").to_string(),
        details: None,
        created_at: Utc::now(),
    }
}

fn titles(rules: &[&'static AchievementRule]) -> Vec<&'static str> {
    rules.iter().map(|r| r.title).collect()
}

#[test]
fn rule_titles_are_unique() {
    let mut seen = HashSet::new();
    for rule in RULES {
        assert!(seen.insert(rule.title), "Duplicate achievement title: {}", rule.title);
    }
}

#[test]
fn empty_log_earns_nothing() {
    let tally = ActivityTally::from_log(&[], today());
    assert!(newly_qualified(&tally, &HashSet::new()).is_empty());
}

#[test]
fn ten_flashcards_and_two_chats_earn_exactly_two_badges() {
    // Ten flashcard sessions over three consecutive days, plus two AI chats:
    // enough for First Steps and Flashcard Master, short of AI Enthusiast
    // (needs 5) and Week Warrior (needs a 7-day streak).
    let mut log = Vec::new();
    for i in 0..10 {
        log.push(record(ActivityType::FlashcardStudied, today() - Duration::days(i % 3)));
    }
    for _ in 0..2 {
        log.push(record(ActivityType::AiChat, today()));
    }

    let tally = ActivityTally::from_log(&log, today());
    assert_eq!(tally.streak, 3);
    assert_eq!(tally.count(ActivityType::FlashcardStudied), 10);

    let granted = newly_qualified(&tally, &HashSet::new());
    assert_eq!(titles(&granted), vec!["First Steps", "Flashcard Master"]);
}

#[test]
fn already_earned_titles_are_not_granted_again() {
    let log = vec![record(ActivityType::AiChat, today())];
    let tally = ActivityTally::from_log(&log, today());

    let earned: HashSet<String> = ["First Steps".to_string()].into_iter().collect();
    assert!(newly_qualified(&tally, &earned).is_empty());
}

#[test]
fn evaluation_is_idempotent() {
    let log = vec![
        record(ActivityType::ResourceUploaded, today()),
        record(ActivityType::ResourceUploaded, today()),
        record(ActivityType::ResourceUploaded, today()),
    ];
    let tally = ActivityTally::from_log(&log, today());
    let earned = HashSet::new();

    let first = titles(&newly_qualified(&tally, &earned));
    let second = titles(&newly_qualified(&tally, &earned));
    assert_eq!(first, second);
    assert_eq!(first, vec!["First Steps", "Resource Hero"]);
}

#[test]
fn a_week_of_activity_earns_week_warrior() {
    let log: Vec<ActivityRecord> = (0..7)
        .map(|i| record(ActivityType::MoodLogged, today() - Duration::days(i)))
        .collect();
    let tally = ActivityTally::from_log(&log, today());
    assert_eq!(tally.streak, 7);

    let granted = titles(&newly_qualified(&tally, &HashSet::new()));
    assert_eq!(granted, vec!["First Steps", "Week Warrior"]);
}

#[test]
fn unparseable_dates_still_count_toward_totals() {
    // Legacy rows with broken dates are invisible to the streak but still
    // counted per type.
    let mut log: Vec<ActivityRecord> = (0..10)
        .map(|_| record(ActivityType::FlashcardStudied, today()))
        .collect();
    for r in &mut log {
        r.activity_date = "not-a-date".into();
    }

    let tally = ActivityTally::from_log(&log, today());
    assert_eq!(tally.streak, 0);
    assert_eq!(tally.count(ActivityType::FlashcardStudied), 10);

    let granted = titles(&newly_qualified(&tally, &HashSet::new()));
    assert_eq!(granted, vec!["First Steps", "Flashcard Master"]);
}

#[test]
fn breakdown_reports_each_logged_type() {
    let log = vec![
        record(ActivityType::MessageSent, today()),
        record(ActivityType::MessageSent, today()),
        record(ActivityType::EventCreated, today()),
    ];
    let tally = ActivityTally::from_log(&log, today());

    let mut breakdown: Vec<(ActivityType, u32)> = tally.breakdown().collect();
    breakdown.sort_by_key(|(_, count)| *count);
    assert_eq!(
        breakdown,
        vec![(ActivityType::EventCreated, 1), (ActivityType::MessageSent, 2)]
    );
}
