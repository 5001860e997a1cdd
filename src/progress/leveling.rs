//! Contains the business logic for XP awards, levelling, and spends.
//! The same curve drives both the owner's ledger and the pet.

use crate::constants::LEVEL_BASE_COST;
use thiserror::Error;

/// Calculates the XP required to advance from `level` to `level + 1`.
pub fn xp_to_level_up(level: i32) -> i64 {
    level as i64 * LEVEL_BASE_COST
}

/// A struct to hold the results of applying an XP award.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwardResult {
    pub new_xp: i64,
    pub new_level: i32,
    pub did_level_up: bool,
}

/// Processes an XP award and calculates any level-ups.
///
/// Each level-up consumes exactly the threshold amount, and the loop handles
/// multiple level-ups from a single large award. Non-positive awards leave the
/// ledger untouched, so neither `xp` nor `level` can regress here.
///
/// # Returns
/// The new `(xp, level)` pair; the caller is responsible for persisting it.
pub fn apply_award(current_xp: i64, current_level: i32, points: i64) -> AwardResult {
    if points <= 0 {
        return AwardResult {
            new_xp: current_xp,
            new_level: current_level,
            did_level_up: false,
        };
    }

    let mut new_xp = current_xp + points;
    let mut new_level = current_level;
    let mut did_level_up = false;

    let mut xp_needed = xp_to_level_up(new_level);
    while new_xp >= xp_needed {
        new_xp -= xp_needed;
        new_level += 1;
        did_level_up = true;
        xp_needed = xp_to_level_up(new_level);
    }

    AwardResult {
        new_xp,
        new_level,
        did_level_up,
    }
}

/// The spend was rejected because the ledger does not cover the cost.
/// Recoverable and user-visible; the ledger is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not enough XP: have {have}, need {need}")]
pub struct InsufficientFunds {
    pub have: i64,
    pub need: i64,
}

/// Deducts `cost` from the ledger XP, used for cosmetic unlocks.
/// Levels are never consumed by a spend, only banked XP.
pub fn spend(current_xp: i64, cost: i64) -> Result<i64, InsufficientFunds> {
    if current_xp >= cost {
        Ok(current_xp - cost)
    } else {
        Err(InsufficientFunds {
            have: current_xp,
            need: cost,
        })
    }
}
