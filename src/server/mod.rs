//! OasisSpace backend.
//!
//! Serves the JSON API used by the web client. Handlers are thin: each one resolves the
//! caller through the auth guard, hands off to a service, and maps the result to a DTO.
//! Services own the business rules (ownership checks, listing validation, payment state)
//! and talk to the repositories in `data/` or to an external provider: Google sign-in,
//! Razorpay, Supabase storage, Brevo mail or Gemini.
//!
//! Layout:
//! - `controller/` handlers and their OpenAPI annotations, one file per API tag
//! - `service/` business rules and provider clients
//! - `data/` SeaORM repositories returning domain models
//! - `model/` domain models and repository parameter types
//! - `middleware/` JWT extraction, `AuthGuard`, OAuth CSRF session
//! - `error/` `AppError` and its conversion into the JSON error body
//! - `config`, `state`, `startup`, `router` wiring built once in `main`
//!
//! Only compiled with the `server` feature.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
