// Library entry so integration tests and the view layers can reference internal modules.
pub mod constants;
pub mod database;
pub mod model;
pub mod progress;
pub mod services;

// Convenient re-exports for frequently used types.
pub use model::AppState;
