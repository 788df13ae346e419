//! Business logic layer.
//!
//! Services sit between controllers and repositories. They enforce ownership and
//! validation rules, orchestrate repository calls, and talk to external providers
//! (storage, email, AI, payments) over the shared `reqwest::Client`.

pub mod admin;
pub mod ai;
pub mod auth;
pub mod dashboard;
pub mod listing;
pub mod mail;
pub mod notification;
pub mod oauth;
pub mod payment;
pub mod storage;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
