//! The data-driven achievement rule table and its evaluator.
//!
//! Rules are declared once, in evaluation order; every view that surfaces
//! achievements goes through [`newly_qualified`] instead of carrying its own
//! copy of the conditions.

use super::streak;
use crate::database::models::{ActivityRecord, ActivityType, AchievementCategory};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

/// The reduced view of an owner's activity log that rule predicates run against.
#[derive(Debug, Clone)]
pub struct ActivityTally {
    counts: HashMap<ActivityType, u32>,
    pub total: u32,
    pub streak: u32,
}

impl ActivityTally {
    /// Reduces the full activity log to per-type counts plus the current streak.
    pub fn from_log(records: &[ActivityRecord], today: NaiveDate) -> Self {
        let mut counts: HashMap<ActivityType, u32> = HashMap::new();
        for record in records {
            *counts.entry(record.activity_type).or_insert(0) += 1;
        }
        let days = streak::active_days(records);
        Self {
            counts,
            total: records.len() as u32,
            streak: streak::current_streak(&days, today),
        }
    }

    /// Number of logged actions of one type.
    pub fn count(&self, activity: ActivityType) -> u32 {
        self.counts.get(&activity).copied().unwrap_or(0)
    }

    /// Per-type counts for the analytics breakdown, in no particular order.
    pub fn breakdown(&self) -> impl Iterator<Item = (ActivityType, u32)> + '_ {
        self.counts.iter().map(|(activity, count)| (*activity, *count))
    }
}

/// One unlockable achievement and the condition that grants it.
pub struct AchievementRule {
    pub title: &'static str,
    pub description: &'static str,
    pub badge_icon: &'static str,
    pub category: AchievementCategory,
    pub condition: fn(&ActivityTally) -> bool,
}

/// All achievements, in declaration order. Evaluation and the order of any
/// returned grants follow this order exactly.
pub const RULES: &[AchievementRule] = &[
    AchievementRule {
        title: "First Steps",
        description: "Used StudyBuddy for the first time",
        badge_icon: "🌟",
        category: AchievementCategory::Milestone,
        condition: |tally| tally.total >= 1,
    },
    AchievementRule {
        title: "Flashcard Master",
        description: "Studied 10 flashcard sets",
        badge_icon: "🧠",
        category: AchievementCategory::Study,
        condition: |tally| tally.count(ActivityType::FlashcardStudied) >= 10,
    },
    AchievementRule {
        title: "AI Enthusiast",
        description: "Had 5 conversations with AI",
        badge_icon: "🤖",
        category: AchievementCategory::Study,
        condition: |tally| tally.count(ActivityType::AiChat) >= 5,
    },
    AchievementRule {
        title: "Resource Hero",
        description: "Uploaded 3 resources",
        badge_icon: "📚",
        category: AchievementCategory::Collaboration,
        condition: |tally| tally.count(ActivityType::ResourceUploaded) >= 3,
    },
    AchievementRule {
        title: "Chatterbox",
        description: "Sent 20 messages",
        badge_icon: "💬",
        category: AchievementCategory::Collaboration,
        condition: |tally| tally.count(ActivityType::MessageSent) >= 20,
    },
    AchievementRule {
        title: "Event Planner",
        description: "Created 5 events",
        badge_icon: "📅",
        category: AchievementCategory::Milestone,
        condition: |tally| tally.count(ActivityType::EventCreated) >= 5,
    },
    AchievementRule {
        title: "Week Warrior",
        description: "Active for 7 consecutive days",
        badge_icon: "🔥",
        category: AchievementCategory::Consistency,
        condition: |tally| tally.streak >= 7,
    },
];

/// Evaluates every rule against the tally and returns the ones that qualify
/// now but have not been earned yet, in declaration order.
///
/// Evaluation is pure; persisting the grants (and surviving the duplicate-row
/// race between overlapping page loads) is the caller's job.
pub fn newly_qualified(
    tally: &ActivityTally,
    already_earned: &HashSet<String>,
) -> Vec<&'static AchievementRule> {
    RULES
        .iter()
        .filter(|rule| (rule.condition)(tally) && !already_earned.contains(rule.title))
        .collect()
}
