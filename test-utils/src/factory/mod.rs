//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories that
//! need a parent row take its id, so tests decide which user owns what.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let seller = factory::user::create_seller(&db).await?;
//!     let listing = factory::listing::create_listing(&db, seller.id).await?;
//!
//!     let (buyer, seller, listing) = factory::helpers::create_listing_with_buyer(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let listing = factory::listing::ListingFactory::new(&db, seller.id)
//!     .name("Lakeside Villa")
//!     .offer(true)
//!     .parking(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities with hashed passwords
//! - `listing` - Create listing entities
//! - `order` - Create payment order entities
//! - `notification` - Create notification entities
//! - `helpers` - Unique id generation and multi-entity setups

pub mod helpers;
pub mod listing;
pub mod notification;
pub mod order;
pub mod user;

pub use listing::create_listing;
pub use notification::create_notification;
pub use order::create_order;
pub use user::{create_admin, create_seller, create_user};
