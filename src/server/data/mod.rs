//! Database repository layer for all domain entities.
//!
//! Repositories handle the CRUD queries for each domain. They use SeaORM entity models
//! internally and return domain models from `server::model`, keeping entity types out of
//! the business logic layer.

pub mod listing;
pub mod notification;
pub mod order;
pub mod saved_listing;
pub mod user;

#[cfg(test)]
mod test;
