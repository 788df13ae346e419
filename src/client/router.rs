use dioxus::prelude::*;

use crate::client::component::{
    page::NotFound, Layout, RequiresAdmin, RequiresLoggedIn, RequiresSeller,
};
use crate::client::route::{
    CreateListing, Dashboard, Home, ListingPage, Profile, Search, SellerRequests, SignIn, SignUp,
    UpdateListing,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/search?:term")]
        Search { term: String },

        #[route("/listing/:id")]
        ListingPage { id: i32 },

        #[route("/sign-in")]
        SignIn {},

        #[route("/sign-up")]
        SignUp {},

        #[layout(RequiresLoggedIn)]
            #[route("/profile")]
            Profile {},
        #[end_layout]

        #[layout(RequiresSeller)]
            #[route("/create-listing")]
            CreateListing {},

            #[route("/update-listing/:id")]
            UpdateListing { id: i32 },

            #[route("/dashboard")]
            Dashboard {},
        #[end_layout]

        #[layout(RequiresAdmin)]
            #[route("/admin/seller-requests")]
            SellerRequests {},
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
