//! This module acts as a central hub for all database-related logic.
//! It declares the specialized submodules so they can be accessed from
//! elsewhere in the application via their full path, e.g.,
//! `database::activity::get_activity_log`.

pub mod achievements;
pub mod activity;
pub mod init;
pub mod models;
pub mod pet;
pub mod profile;
