//! Ledger service: activity ingestion, XP awards/spends, and the derived
//! progress summary the dashboard, analytics, and achievements views share.

use crate::database;
use crate::database::models::{Achievement, ActivityType};
use crate::progress::achievements::{self, AchievementRule, ActivityTally};
use crate::progress::leveling::{self, AwardResult, InsufficientFunds};
use chrono::NaiveDate;
use sqlx::PgPool;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Everything the progress views render: the reduced activity tally (counts,
/// total, streak) plus the earned achievements, newest first.
#[derive(Debug, Clone)]
pub struct ProgressSummary {
    pub tally: ActivityTally,
    pub achievements: Vec<Achievement>,
}

/// Appends one activity record for a qualifying user action.
///
/// Best effort: a failed write is logged and dropped, never surfaced to the
/// caller. Callers must invoke this at most once per logical action; no
/// dedup happens here.
#[instrument(level = "debug", skip(pool, details), fields(owner = %owner, activity = ?activity))]
pub async fn record_activity(
    pool: &PgPool,
    owner: &str,
    activity: ActivityType,
    activity_date: NaiveDate,
    details: Option<&str>,
) {
    if let Err(e) = database::activity::log_activity(pool, owner, activity, activity_date, details).await
    {
        warn!(target = "progress.ingest", error = %e, "activity record dropped");
    }
}

/// Adds `points` to the owner's ledger, levelling up as the curve dictates.
///
/// Returns the applied result for UI toasts, or `None` when the store was
/// unreachable (the award is lost; accepted best-effort policy).
#[instrument(level = "debug", skip(pool), fields(owner = %owner, points))]
pub async fn award_xp(pool: &PgPool, owner: &str, points: i64) -> Option<AwardResult> {
    let profile = match database::profile::get_or_create_profile(pool, owner).await {
        Ok(p) => p,
        Err(e) => {
            warn!(target = "progress.ledger", error = %e, "award skipped, profile unavailable");
            return None;
        }
    };

    let result = leveling::apply_award(profile.xp, profile.level, points);
    if let Err(e) = database::profile::save_ledger(pool, owner, result.new_xp, result.new_level).await {
        warn!(target = "progress.ledger", error = %e, "award dropped, ledger not saved");
        return None;
    }
    Some(result)
}

/// The ways a spend can fail. Insufficient funds is the recoverable,
/// user-visible case; a store error means the spend never happened.
#[derive(Debug, Error)]
pub enum SpendXpError {
    #[error(transparent)]
    InsufficientFunds(#[from] InsufficientFunds),
    #[error("progress store unavailable: {0}")]
    Store(#[from] sqlx::Error),
}

/// Deducts `cost` from the owner's ledger XP and returns the remaining XP.
/// Unlike awards this is not fire-and-forget: the caller needs the outcome to
/// decide whether the unlock goes through.
#[instrument(level = "debug", skip(pool), fields(owner = %owner, cost))]
pub async fn spend_xp(pool: &PgPool, owner: &str, cost: i64) -> Result<i64, SpendXpError> {
    let profile = database::profile::get_or_create_profile(pool, owner).await?;
    let remaining = leveling::spend(profile.xp, cost)?;
    database::profile::save_ledger(pool, owner, remaining, profile.level).await?;
    Ok(remaining)
}

/// Loads and reduces the owner's progress state as of `today`.
///
/// The two store reads are independent and issued concurrently; either one
/// failing degrades to empty data rather than an error page.
#[instrument(level = "debug", skip(pool), fields(owner = %owner))]
pub async fn progress_summary(pool: &PgPool, owner: &str, today: NaiveDate) -> ProgressSummary {
    let (log, earned) = tokio::join!(
        database::activity::get_activity_log(pool, owner),
        database::achievements::get_achievements(pool, owner),
    );

    let log = log.unwrap_or_else(|e| {
        warn!(target = "progress.summary", error = %e, "activity log unavailable, treating as empty");
        Vec::new()
    });
    let achievements = earned.unwrap_or_else(|e| {
        warn!(target = "progress.summary", error = %e, "achievements unavailable, treating as empty");
        Vec::new()
    });

    ProgressSummary {
        tally: ActivityTally::from_log(&log, today),
        achievements,
    }
}

/// Re-evaluates the rule table against the owner's full history and persists
/// any newly qualifying achievements, earned as of `today`.
///
/// Returns the rules granted in this pass, in declaration order, for the
/// unlock toast. A grant that loses the duplicate race (another tab got there
/// first) is silently skipped; a failed write is logged and dropped.
#[instrument(level = "debug", skip(pool), fields(owner = %owner))]
pub async fn refresh_achievements(
    pool: &PgPool,
    owner: &str,
    today: NaiveDate,
) -> Vec<&'static AchievementRule> {
    let summary = progress_summary(pool, owner, today).await;
    let earned: HashSet<String> = summary.achievements.iter().map(|a| a.title.clone()).collect();

    let mut granted = Vec::new();
    for rule in achievements::newly_qualified(&summary.tally, &earned) {
        match database::achievements::grant_achievement(pool, owner, rule, today).await {
            Ok(true) => granted.push(rule),
            Ok(false) => {
                debug!(target = "progress.achievements", title = rule.title, "already granted elsewhere")
            }
            Err(e) => {
                warn!(target = "progress.achievements", error = %e, title = rule.title, "grant dropped")
            }
        }
    }
    granted
}

/// Wipes the owner's progress: activity log, achievements, pet, and the
/// ledger back to `xp = 0, level = 1`, in one transaction.
///
/// This is the explicit, user-confirmed reset; unlike the ingestion path its
/// errors propagate so the settings page can tell the user it failed.
#[instrument(level = "debug", skip(pool), fields(owner = %owner))]
pub async fn reset_progress(pool: &PgPool, owner: &str) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    database::activity::delete_all(&mut tx, owner).await?;
    database::achievements::delete_all(&mut tx, owner).await?;
    database::pet::delete_all(&mut tx, owner).await?;
    database::profile::reset_ledger(&mut tx, owner).await?;
    tx.commit().await
}
