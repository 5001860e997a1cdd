//! Contains all database functions related to the study pet.
//! One pet per owner; hunger/feeding state is computed by the pure
//! progression functions and persisted here.

use super::models::Pet;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};

const PET_COLUMNS: &str =
    "pet_id, owner, name, species, level, xp, happiness, hunger, last_fed, color, accessories";

/// Fetches the owner's pet, if one has been adopted.
pub async fn get_pet(pool: &PgPool, owner: &str) -> Result<Option<Pet>, sqlx::Error> {
    sqlx::query_as::<_, Pet>(&format!("SELECT {PET_COLUMNS} FROM pets WHERE owner = $1"))
        .bind(owner)
        .fetch_optional(pool)
        .await
}

/// Creates the owner's pet with the standard hatchling stats.
/// The `owner` unique constraint keeps adoption a one-time event.
pub async fn create_pet(
    pool: &PgPool,
    owner: &str,
    name: &str,
    species: &str,
    color: &str,
) -> Result<Pet, sqlx::Error> {
    sqlx::query_as::<_, Pet>(&format!(
        "INSERT INTO pets (owner, name, species, color) VALUES ($1, $2, $3, $4) RETURNING {PET_COLUMNS}"
    ))
    .bind(owner)
    .bind(name)
    .bind(species)
    .bind(color)
    .fetch_one(pool)
    .await
}

/// Persists a recomputed hunger value without touching the feeding timestamp.
pub async fn save_hunger(pool: &PgPool, pet_id: i32, hunger: i32) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE pets SET hunger = $2 WHERE pet_id = $1")
        .bind(pet_id)
        .bind(hunger)
        .execute(pool)
        .await?;
    Ok(())
}

/// Persists the full outcome of a feeding in one statement.
pub async fn save_feeding(
    pool: &PgPool,
    pet_id: i32,
    hunger: i32,
    happiness: i32,
    xp: i64,
    level: i32,
    last_fed: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE pets SET hunger = $2, happiness = $3, xp = $4, level = $5, last_fed = $6 WHERE pet_id = $1",
    )
    .bind(pet_id)
    .bind(hunger)
    .bind(happiness)
    .bind(xp)
    .bind(level)
    .bind(last_fed)
    .execute(pool)
    .await?;
    Ok(())
}

/// Persists an XP/level change that did not come from feeding (mood tools,
/// garden, expense logging all award pet XP).
pub async fn save_progress(pool: &PgPool, pet_id: i32, xp: i64, level: i32) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE pets SET xp = $2, level = $3 WHERE pet_id = $1")
        .bind(pet_id)
        .bind(xp)
        .bind(level)
        .execute(pool)
        .await?;
    Ok(())
}

/// Persists the unlocked accessory list.
pub async fn save_accessories(pool: &PgPool, pet_id: i32, accessories: &[String]) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE pets SET accessories = $2 WHERE pet_id = $1")
        .bind(pet_id)
        .bind(accessories)
        .execute(pool)
        .await?;
    Ok(())
}

/// Removes the owner's pet. Only the account reset calls this.
pub async fn delete_all(tx: &mut Transaction<'_, Postgres>, owner: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM pets WHERE owner = $1")
        .bind(owner)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
