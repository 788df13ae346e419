#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod admin;
#[cfg(feature = "web")]
pub mod ai;
#[cfg(feature = "web")]
pub mod auth;
#[cfg(feature = "web")]
pub mod dashboard;
#[cfg(feature = "web")]
pub mod listing;
#[cfg(feature = "web")]
pub mod notification;
#[cfg(feature = "web")]
pub mod payment;
#[cfg(feature = "web")]
pub mod upload;
#[cfg(feature = "web")]
pub mod user;
