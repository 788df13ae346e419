//! SeaORM entity models for OasisSpace.
//!
//! One module per stored document kind. Enumerated columns are stored as
//! lowercase strings so rows stay readable from the SQLite shell.

pub mod prelude;

pub mod listing;
pub mod notification;
pub mod order;
pub mod saved_listing;
pub mod user;
