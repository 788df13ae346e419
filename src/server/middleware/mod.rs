//! Request guards and session helpers.
//!
//! - `auth` - Session token extraction and permission checks
//! - `session` - Typed access to the OAuth CSRF state stored in the server session

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
