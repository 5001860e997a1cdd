//! Contains all database functions related to earned achievements.

use super::models::Achievement;
use crate::progress::achievements::AchievementRule;
use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, Transaction};

/// Fetches the owner's earned achievements, most recent first.
pub async fn get_achievements(pool: &PgPool, owner: &str) -> Result<Vec<Achievement>, sqlx::Error> {
    sqlx::query_as::<_, Achievement>(
        "SELECT achievement_id, owner, title, description, badge_icon, category, earned_date
         FROM achievements WHERE owner = $1 ORDER BY earned_date DESC, achievement_id DESC",
    )
    .bind(owner)
    .fetch_all(pool)
    .await
}

/// Persists a newly earned achievement. Returns `false` when the `(owner, title)`
/// row already exists, which makes concurrent duplicate grants a no-op rather
/// than an error.
pub async fn grant_achievement(
    pool: &PgPool,
    owner: &str,
    rule: &AchievementRule,
    earned_date: NaiveDate,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO achievements (owner, title, description, badge_icon, category, earned_date)
         VALUES ($1, $2, $3, $4, $5, $6)
         ON CONFLICT (owner, title) DO NOTHING",
    )
    .bind(owner)
    .bind(rule.title)
    .bind(rule.description)
    .bind(rule.badge_icon)
    .bind(rule.category)
    .bind(earned_date)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() == 1)
}

/// Removes every achievement for the owner. Only the account reset calls this.
pub async fn delete_all(tx: &mut Transaction<'_, Postgres>, owner: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM achievements WHERE owner = $1")
        .bind(owner)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
