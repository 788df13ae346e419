//! Data transfer objects shared between the web client and the server.
//!
//! Every type here is serialized as JSON over the REST API. Server builds additionally
//! derive `utoipa::ToSchema` so the types appear in the generated OpenAPI document.

pub mod ai;
pub mod api;
pub mod dashboard;
pub mod listing;
pub mod notification;
pub mod order;
pub mod upload;
pub mod user;
