//! Contains all database functions related to the per-owner XP/level ledger.

use super::models::ProgressProfile;
use sqlx::{PgPool, Postgres, Transaction};

/// Fetches the owner's ledger, creating the initial `xp = 0, level = 1` row on
/// first contact. Attempt the insert and capture the row with RETURNING; if the
/// row already exists, fall back to a plain SELECT. This guarantees we observe
/// either the freshly inserted row or the existing one.
pub async fn get_or_create_profile(pool: &PgPool, owner: &str) -> Result<ProgressProfile, sqlx::Error> {
    if let Some(inserted) = sqlx::query_as::<_, ProgressProfile>(
        "INSERT INTO progress_profiles (owner) VALUES ($1) ON CONFLICT (owner) DO NOTHING RETURNING xp, level",
    )
    .bind(owner)
    .fetch_optional(pool)
    .await?
    {
        return Ok(inserted);
    }
    sqlx::query_as::<_, ProgressProfile>("SELECT xp, level FROM progress_profiles WHERE owner = $1")
        .bind(owner)
        .fetch_one(pool)
        .await
}

/// Writes back an updated `(xp, level)` pair. The pure award/spend functions
/// produce the values; this is the only place they are persisted.
pub async fn save_ledger(pool: &PgPool, owner: &str, xp: i64, level: i32) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE progress_profiles SET xp = $2, level = $3 WHERE owner = $1")
        .bind(owner)
        .bind(xp)
        .bind(level)
        .execute(pool)
        .await?;
    Ok(())
}

/// Returns the ledger to its initial values. Only the account reset calls this.
pub async fn reset_ledger(tx: &mut Transaction<'_, Postgres>, owner: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE progress_profiles SET xp = 0, level = 1 WHERE owner = $1")
        .bind(owner)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
