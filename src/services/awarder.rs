//! The XP-award capability handed to widgets.
//!
//! Any component may emit an award through a shared `Arc<dyn XpAwarder>`
//! without holding a reference to the ledger itself. This replaces the old
//! pattern of ambient callbacks installed by whichever widget mounted first.

use super::ledger;
use crate::database;
use crate::progress::leveling;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, warn};

/// Capability for emitting XP awards. Both methods are fire-and-forget:
/// failures are logged by the implementation, never returned to the emitter.
#[async_trait]
pub trait XpAwarder: Send + Sync {
    /// Award points to the owner's ledger.
    async fn award_user_xp(&self, owner: &str, points: i64);

    /// Award points to the owner's pet, if one exists.
    async fn award_pet_xp(&self, owner: &str, points: i64);
}

/// The store-backed awarder built by [`crate::AppState::xp_awarder`].
pub struct LedgerXpAwarder {
    db: PgPool,
}

impl LedgerXpAwarder {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl XpAwarder for LedgerXpAwarder {
    async fn award_user_xp(&self, owner: &str, points: i64) {
        ledger::award_xp(&self.db, owner, points).await;
    }

    async fn award_pet_xp(&self, owner: &str, points: i64) {
        match database::pet::get_pet(&self.db, owner).await {
            Ok(Some(pet)) => {
                let award = leveling::apply_award(pet.xp, pet.level, points);
                if let Err(e) =
                    database::pet::save_progress(&self.db, pet.pet_id, award.new_xp, award.new_level).await
                {
                    warn!(target = "progress.pet", error = %e, "pet award dropped");
                }
            }
            Ok(None) => debug!(target = "progress.pet", owner = %owner, "no pet to award"),
            Err(e) => warn!(target = "progress.pet", error = %e, "pet award skipped"),
        }
    }
}
