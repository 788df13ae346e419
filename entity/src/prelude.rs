pub use super::listing::Entity as Listing;
pub use super::notification::Entity as Notification;
pub use super::order::Entity as Order;
pub use super::saved_listing::Entity as SavedListing;
pub use super::user::Entity as User;
