//! HTTP route table and OpenAPI document.
//!
//! Every handler is registered through `utoipa-axum` so the generated document always
//! matches the mounted routes. The document is served by Swagger UI at `/api/docs`.

use axum::{extract::DefaultBodyLimit, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin::{self, ADMIN_TAG},
        ai::{self, AI_TAG},
        auth::{self, AUTH_TAG},
        dashboard::{self, DASHBOARD_TAG},
        listing::{self, LISTING_TAG},
        notification::{self, NOTIFICATION_TAG},
        payment::{self, PAYMENT_TAG},
        upload::{self, UPLOAD_TAG},
        user::{self, USER_TAG},
    },
    service::storage::MAX_IMAGE_BYTES,
    state::AppState,
};

/// Upper bound for the whole multipart body; leaves room for form overhead above the
/// image size limit so oversized images get a descriptive 400 instead of a 413.
const UPLOAD_BODY_LIMIT: usize = MAX_IMAGE_BYTES + 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "OasisSpace API", description = "Real-estate listings, payments and messaging"),
    tags(
        (name = AUTH_TAG, description = "Sign-up, sign-in and Google OAuth"),
        (name = USER_TAG, description = "Profiles, saved listings and seller requests"),
        (name = LISTING_TAG, description = "Listing management and search"),
        (name = UPLOAD_TAG, description = "Image uploads"),
        (name = AI_TAG, description = "Generated descriptions and the chat assistant"),
        (name = PAYMENT_TAG, description = "Checkout and order history"),
        (name = NOTIFICATION_TAG, description = "In-app notifications and owner contact"),
        (name = DASHBOARD_TAG, description = "Admin and seller statistics"),
        (name = ADMIN_TAG, description = "Seller request review")
    )
)]
pub struct ApiDoc;

/// Builds the API router with Swagger UI mounted at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

fn api_router() -> OpenApiRouter<AppState> {
    let uploads = OpenApiRouter::new()
        .routes(routes!(upload::upload_image))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT));

    OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Auth
        .routes(routes!(auth::sign_up))
        .routes(routes!(auth::sign_in))
        .routes(routes!(auth::google_login))
        .routes(routes!(auth::google_callback))
        .routes(routes!(auth::sign_out))
        .routes(routes!(auth::get_user))
        // Users
        .routes(routes!(user::update_user))
        .routes(routes!(user::delete_user))
        .routes(routes!(user::get_user_listings))
        .routes(routes!(user::get_user_contact))
        .routes(routes!(user::toggle_saved_listing))
        .routes(routes!(user::get_saved_listings))
        .routes(routes!(user::request_seller))
        // Listings
        .routes(routes!(listing::create_listing))
        .routes(routes!(listing::update_listing))
        .routes(routes!(listing::delete_listing))
        .routes(routes!(listing::get_listing))
        .routes(routes!(listing::search_listings))
        .routes(routes!(listing::set_listing_status))
        .routes(routes!(listing::toggle_featured))
        // AI
        .routes(routes!(ai::generate_description))
        .routes(routes!(ai::chat))
        // Payments
        .routes(routes!(payment::create_order))
        .routes(routes!(payment::verify_payment))
        .routes(routes!(payment::cancel_order))
        .routes(routes!(payment::get_orders))
        .routes(routes!(payment::delete_order))
        // Notifications
        .routes(routes!(
            notification::get_notifications,
            notification::contact_owner
        ))
        .routes(routes!(notification::mark_notification_read))
        .routes(routes!(notification::delete_notification))
        // Dashboard & admin
        .routes(routes!(dashboard::get_stats))
        .routes(routes!(admin::get_seller_requests))
        .routes(routes!(admin::review_seller_request))
        .merge(uploads)
}
