pub mod dashboard;
pub mod home;
pub mod listing;
pub mod listing_form;
pub mod profile;
pub mod search;
pub mod seller_requests;
pub mod sign_in;
pub mod sign_up;

pub use dashboard::Dashboard;
pub use home::Home;
pub use listing::ListingPage;
pub use listing_form::{CreateListing, UpdateListing};
pub use profile::Profile;
pub use search::Search;
pub use seller_requests::SellerRequests;
pub use sign_in::SignIn;
pub use sign_up::SignUp;
