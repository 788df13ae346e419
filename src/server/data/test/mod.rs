mod listing;
mod notification;
mod order;
mod saved_listing;
mod user;
