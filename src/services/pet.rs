//! Pet service: adoption, load-time hunger reconciliation, feeding, and
//! accessory unlocks paid from the owner's ledger XP.

use super::ledger::{self, SpendXpError};
use crate::database;
use crate::database::models::Pet;
use crate::progress::pet::{accessory_by_id, apply_feeding, hunger_after_idle};
use chrono::Utc;
use sqlx::PgPool;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Creates the owner's pet with the standard hatchling stats.
/// Returns `None` if the store rejected it (including a second adoption).
#[instrument(level = "debug", skip(pool), fields(owner = %owner, name = %name))]
pub async fn adopt_pet(pool: &PgPool, owner: &str, name: &str, species: &str, color: &str) -> Option<Pet> {
    match database::pet::create_pet(pool, owner, name, species, color).await {
        Ok(pet) => Some(pet),
        Err(e) => {
            warn!(target = "progress.pet", error = %e, "adoption failed");
            None
        }
    }
}

/// Fetches the owner's pet with hunger reconciled against the time since its
/// last feeding. This is the primary function that should be used to get the
/// pet's up-to-date state on page load.
///
/// The recomputed hunger is persisted only when it actually changed; if that
/// write fails the stale value is returned and the next load tries again.
#[instrument(level = "debug", skip(pool), fields(owner = %owner))]
pub async fn checkin_pet(pool: &PgPool, owner: &str) -> Option<Pet> {
    let mut pet = match database::pet::get_pet(pool, owner).await {
        Ok(Some(pet)) => pet,
        Ok(None) => return None,
        Err(e) => {
            warn!(target = "progress.pet", error = %e, "pet unavailable");
            return None;
        }
    };

    let (hunger, needs_update) = hunger_after_idle(pet.hunger, pet.last_fed, Utc::now());
    if needs_update {
        match database::pet::save_hunger(pool, pet.pet_id, hunger).await {
            Ok(()) => pet.hunger = hunger,
            Err(e) => warn!(target = "progress.pet", error = %e, "hunger update dropped"),
        }
    }
    Some(pet)
}

/// Feeds the pet: relieves hunger, raises happiness, awards the feeding XP,
/// and resets the feeding timestamp. Returns `None` when there is no pet to
/// feed; if the write fails the feeding is dropped and the pet comes back
/// unchanged.
#[instrument(level = "debug", skip(pool), fields(owner = %owner))]
pub async fn feed_pet(pool: &PgPool, owner: &str) -> Option<Pet> {
    let mut pet = match database::pet::get_pet(pool, owner).await {
        Ok(Some(pet)) => pet,
        Ok(None) => return None,
        Err(e) => {
            warn!(target = "progress.pet", error = %e, "pet unavailable");
            return None;
        }
    };

    let outcome = apply_feeding(&pet);
    let now = Utc::now();
    if let Err(e) = database::pet::save_feeding(
        pool,
        pet.pet_id,
        outcome.hunger,
        outcome.happiness,
        outcome.award.new_xp,
        outcome.award.new_level,
        now,
    )
    .await
    {
        warn!(target = "progress.pet", error = %e, "feeding dropped");
        return Some(pet);
    }

    pet.hunger = outcome.hunger;
    pet.happiness = outcome.happiness;
    pet.xp = outcome.award.new_xp;
    pet.level = outcome.award.new_level;
    pet.last_fed = now;
    Some(pet)
}

/// The ways an accessory unlock can fail.
#[derive(Debug, Error)]
pub enum UnlockError {
    #[error("unknown accessory: {0}")]
    UnknownAccessory(String),
    #[error("no pet adopted yet")]
    NoPet,
    #[error(transparent)]
    Spend(#[from] SpendXpError),
    #[error("progress store unavailable: {0}")]
    Store(#[from] sqlx::Error),
}

/// Unlocks a cosmetic accessory for the pet, spending the owner's ledger XP.
///
/// Unlocking an accessory the pet already wears is a no-op and costs nothing.
/// The spend and the accessory write are separate store calls; a crash
/// between them loses the XP without the unlock (accepted, same as the
/// activity/award pair).
#[instrument(level = "debug", skip(pool), fields(owner = %owner, accessory = %accessory_id))]
pub async fn unlock_accessory(pool: &PgPool, owner: &str, accessory_id: &str) -> Result<Pet, UnlockError> {
    let accessory = accessory_by_id(accessory_id)
        .ok_or_else(|| UnlockError::UnknownAccessory(accessory_id.to_string()))?;

    let mut pet = database::pet::get_pet(pool, owner)
        .await?
        .ok_or(UnlockError::NoPet)?;

    if pet.accessories.iter().any(|a| a == accessory.id) {
        debug!(target = "progress.pet", "accessory already unlocked");
        return Ok(pet);
    }

    ledger::spend_xp(pool, owner, accessory.cost).await?;

    pet.accessories.push(accessory.id.to_string());
    database::pet::save_accessories(pool, pet.pet_id, &pet.accessories).await?;
    Ok(pet)
}
