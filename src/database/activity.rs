//! Contains all database functions related to the append-only activity log.

use super::models::{ActivityRecord, ActivityType};
use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, Transaction};

/// Appends one activity record for the owner. Records are never updated;
/// a repeat of the same action on the same day simply appends another row.
pub async fn log_activity(
    pool: &PgPool,
    owner: &str,
    activity: ActivityType,
    activity_date: NaiveDate,
    details: Option<&str>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO user_activities (owner, activity_type, activity_date, details) VALUES ($1, $2, $3, $4)",
    )
    .bind(owner)
    .bind(activity)
    .bind(activity_date.format("%Y-%m-%d").to_string())
    .bind(details)
    .execute(pool)
    .await?;
    Ok(())
}

/// Fetches the owner's full activity log, newest first. Streak and tally
/// reduction happen client-side; the store is only filtered by owner.
pub async fn get_activity_log(pool: &PgPool, owner: &str) -> Result<Vec<ActivityRecord>, sqlx::Error> {
    sqlx::query_as::<_, ActivityRecord>(
        "SELECT activity_id, owner, activity_type, activity_date, details, created_at
         FROM user_activities WHERE owner = $1 ORDER BY created_at DESC",
    )
    .bind(owner)
    .fetch_all(pool)
    .await
}

/// Removes every activity record for the owner. Only the account reset calls this.
pub async fn delete_all(tx: &mut Transaction<'_, Postgres>, owner: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM user_activities WHERE owner = $1")
        .bind(owner)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
