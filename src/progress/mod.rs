//! Pure progression logic: streaks, achievement rules, XP/levelling, and pet
//! upkeep. Nothing here touches the database; every function is computed from
//! in-memory values so the same rules serve the dashboard, analytics, and
//! achievements views without drifting copies.

pub mod achievements;
pub mod leveling;
pub mod pet;
pub mod streak;
