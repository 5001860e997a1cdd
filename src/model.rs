//! This module defines the shared data structures used throughout the application.
//! The view layers construct one `AppState` at startup and hand out clones of the
//! pool (and `XpAwarder` handles) to whatever widgets need them.

use crate::database::init::DbPool;
use crate::services::awarder::{LedgerXpAwarder, XpAwarder};
use std::sync::Arc;

/// The central, shared state of the application.
pub struct AppState {
    /// The connection pool for the PostgreSQL progress store.
    pub db: DbPool,
}

impl AppState {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Build an [`XpAwarder`] handle backed by this state's pool.
    ///
    /// Any widget that wants to emit XP awards is given one of these instead of
    /// reaching for mount-order-dependent global callbacks.
    pub fn xp_awarder(&self) -> Arc<dyn XpAwarder> {
        Arc::new(LedgerXpAwarder::new(self.db.clone()))
    }
}
