// Central constants for progression balance and limits.
pub const STREAK_WINDOW_DAYS: i64 = 30; // how far back the streak scan looks
pub const LEVEL_BASE_COST: i64 = 100; // levelling from L to L+1 costs L * this

// Pet upkeep. Hunger drifts upward while the pet goes unfed and feeding
// relieves it; both gauges are clamped to 0..=100.
pub const HUNGER_PER_HOUR: i64 = 5;
pub const HUNGER_CAP: i32 = 100;
pub const FEED_HUNGER_RELIEF: i32 = 30;
pub const FEED_HAPPINESS_GAIN: i32 = 10;
pub const HAPPINESS_CAP: i32 = 100;

// Fixed XP awards per qualifying action. The ingestion glue takes the amount
// from its caller; these are the amounts the view layers pass.
pub const XP_STUDY_PLAN_CREATED: i64 = 15;
pub const XP_DOCUMENT_ANALYZED: i64 = 20;
pub const XP_BREATHING_EXERCISE: i64 = 10;
pub const XP_MINDFUL_PUZZLE: i64 = 10;
pub const XP_GARDEN_TENDED: i64 = 10;
pub const XP_MOOD_LOGGED: i64 = 5;
pub const XP_EXPENSE_LOGGED: i64 = 3;
pub const XP_PET_FED: i64 = 10;

use crate::database::models::{AchievementCategory, ActivityType};

/// Return the display label for an activity type, as shown in the analytics breakdown.
pub fn activity_label(activity: ActivityType) -> &'static str {
    use ActivityType::*;
    match activity {
        FlashcardStudied => "Flashcards",
        AiChat => "AI Chats",
        ResourceViewed => "Resources Viewed",
        ResourceUploaded => "Resources Uploaded",
        MessageSent => "Messages",
        EventCreated => "Events Created",
        StudyPlanCreated => "Study Plans",
        DocumentAnalyzed => "Documents Analyzed",
        MoodLogged => "Moods Logged",
    }
}

/// Return the display label for an achievement category.
pub fn category_label(category: AchievementCategory) -> &'static str {
    use AchievementCategory::*;
    match category {
        Study => "Study",
        Collaboration => "Collaboration",
        Consistency => "Consistency",
        Milestone => "Milestone",
    }
}
