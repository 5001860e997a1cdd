//! Contains all the data structures that map to database tables or query results.

use sqlx::Type;
use sqlx::types::chrono::{DateTime, NaiveDate, Utc};

/// The kind of user action an activity record stands for.
///
/// Stored as the `activity_type` Postgres enum; one record is appended per
/// qualifying action, never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Type)]
#[sqlx(type_name = "activity_type", rename_all = "snake_case")]
pub enum ActivityType {
    FlashcardStudied,
    AiChat,
    ResourceViewed,
    ResourceUploaded,
    MessageSent,
    EventCreated,
    StudyPlanCreated,
    DocumentAnalyzed,
    MoodLogged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Type)]
#[sqlx(type_name = "achievement_category", rename_all = "snake_case")]
pub enum AchievementCategory {
    Study,
    Collaboration,
    Consistency,
    Milestone,
}

/// One appended row per qualifying user action.
///
/// `activity_date` is the calendar day in the owner's reporting timezone,
/// kept as `YYYY-MM-DD` text the way the hosted store recorded it. Legacy
/// rows may carry unparseable text; the reducers skip those rather than fail.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ActivityRecord {
    pub activity_id: i32,
    pub owner: String,
    pub activity_type: ActivityType,
    pub activity_date: String,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Achievement {
    pub achievement_id: i32,
    pub owner: String,
    pub title: String,
    pub description: String,
    pub badge_icon: String,
    pub category: AchievementCategory,
    pub earned_date: NaiveDate,
}

/// The persisted per-owner ledger pair. `level` only moves through
/// [`crate::progress::leveling::apply_award`] or an explicit reset.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ProgressProfile {
    pub xp: i64,
    pub level: i32,
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Pet {
    pub pet_id: i32,
    pub owner: String,
    pub name: String,
    pub species: String,
    pub level: i32,
    pub xp: i64,
    pub happiness: i32,
    pub hunger: i32,
    pub last_fed: DateTime<Utc>,
    pub color: String,
    pub accessories: Vec<String>,
}
