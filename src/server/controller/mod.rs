//! HTTP request handlers.
//!
//! Handlers extract the request, run the `AuthGuard` for their access rules, call one
//! service method and convert the resulting domain model into a DTO.

pub mod admin;
pub mod ai;
pub mod auth;
pub mod dashboard;
pub mod listing;
pub mod notification;
pub mod payment;
pub mod upload;
pub mod user;
