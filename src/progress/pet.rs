//! Contains the business logic for study-pet upkeep: hunger drift, feeding,
//! and the cosmetic accessory catalog.

use super::leveling::{self, AwardResult};
use crate::constants::{
    FEED_HAPPINESS_GAIN, FEED_HUNGER_RELIEF, HAPPINESS_CAP, HUNGER_CAP, HUNGER_PER_HOUR, XP_PET_FED,
};
use crate::database::models::Pet;
use chrono::{DateTime, Utc};

/// Calculates the hunger a pet should show after going unfed since `last_fed`.
///
/// Hunger drifts upward at [`HUNGER_PER_HOUR`], capped at [`HUNGER_CAP`]. It is
/// recomputed from the timestamp on demand rather than ticked by a timer.
///
/// Returns a tuple of `(new_hunger, needs_database_update)`.
pub fn hunger_after_idle(
    current_hunger: i32,
    last_fed: DateTime<Utc>,
    now: DateTime<Utc>,
) -> (i32, bool) {
    let idle = now - last_fed;
    let gained = (idle.num_minutes() * HUNGER_PER_HOUR / 60) as i32;
    if gained <= 0 {
        return (current_hunger, false);
    }

    let new_hunger = (current_hunger + gained).min(HUNGER_CAP);

    // Only flag for an update if the value has actually changed.
    (new_hunger, new_hunger != current_hunger)
}

/// A struct to hold the results of one feeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedingOutcome {
    pub hunger: i32,
    pub happiness: i32,
    pub award: AwardResult,
}

/// Calculates the effect of feeding: hunger relieved, happiness raised, and
/// the feeding XP run through the shared levelling curve.
pub fn apply_feeding(pet: &Pet) -> FeedingOutcome {
    FeedingOutcome {
        hunger: (pet.hunger - FEED_HUNGER_RELIEF).max(0),
        happiness: (pet.happiness + FEED_HAPPINESS_GAIN).min(HAPPINESS_CAP),
        award: leveling::apply_award(pet.xp, pet.level, XP_PET_FED),
    }
}

/// One cosmetic accessory the pet can wear.
pub struct Accessory {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub cost: i64,
}

/// All purchasable accessories. Costs are paid from the owner's ledger XP.
pub const ACCESSORIES: &[Accessory] = &[
    Accessory {
        id: "crown",
        name: "Crown",
        emoji: "👑",
        cost: 50,
    },
    Accessory {
        id: "glasses",
        name: "Sunglasses",
        emoji: "🕶️",
        cost: 30,
    },
    Accessory {
        id: "bowtie",
        name: "Bow Tie",
        emoji: "🎀",
        cost: 40,
    },
    Accessory {
        id: "hat",
        name: "Top Hat",
        emoji: "🎩",
        cost: 60,
    },
    Accessory {
        id: "star",
        name: "Star",
        emoji: "⭐",
        cost: 35,
    },
    Accessory {
        id: "heart",
        name: "Heart",
        emoji: "💖",
        cost: 45,
    },
];

/// Looks up an accessory by its id.
pub fn accessory_by_id(id: &str) -> Option<&'static Accessory> {
    ACCESSORIES.iter().find(|a| a.id == id)
}
