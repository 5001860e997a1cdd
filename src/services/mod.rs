//! Service layer: the boundary where the rest of the application invokes the
//! progress ledger. Store failures on this path are logged and absorbed so a
//! flaky network call never blocks the page that triggered it.

pub mod awarder;
pub mod ledger;
pub mod pet;
