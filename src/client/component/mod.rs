pub mod chat_widget;
pub mod header;
pub mod layout;
pub mod listing_card;
pub mod modal;
pub mod page;
pub mod protected_layout;

pub use chat_widget::ChatWidget;
pub use header::Header;
pub use layout::Layout;
pub use listing_card::ListingCard;
pub use modal::{ConfirmationModal, Modal};
pub use page::Page;
pub use protected_layout::{ProtectedLayout, RequiresAdmin, RequiresLoggedIn, RequiresSeller};
