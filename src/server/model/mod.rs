//! Domain models and operation parameters.
//!
//! Repositories convert entity models into these types at the data boundary, services
//! work exclusively with them, and controllers convert them to DTOs with `into_dto`.

pub mod dashboard;
pub mod listing;
pub mod notification;
pub mod order;
pub mod user;
