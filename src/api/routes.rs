//! API route configuration.
//!
//! Every route under `/api` requires an identity context; handlers declare an
//! [`crate::domain::auth::AuthContext`] extractor and requests without the
//! identity headers are rejected with 401. Admin-only rules are enforced in
//! the services, not in routing.

use crate::api::handlers::{
    approve_listing_handler, create_category_handler, create_listing_handler,
    delete_listing_handler, get_listing_handler, list_categories_handler,
    provider_listings_handler, reject_listing_handler, search_handler, update_listing_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST   /provider/{provider_id}/listings`        - Create a listing (starts unapproved)
/// - `GET    /provider/{provider_id}/listings`        - List a provider's listings
/// - `GET    /listings/{listing_id}`                  - Get one listing
/// - `PATCH  /listings/{listing_id}`                  - Partially update a listing
/// - `DELETE /listings/{listing_id}`                  - Delete a listing (idempotent)
/// - `POST   /admin/listings/{listing_id}/approve`    - Approve (admin)
/// - `POST   /admin/listings/{listing_id}/reject`     - Reject (admin)
/// - `GET    /categories`                             - List categories
/// - `POST   /admin/categories`                       - Create a category (admin)
/// - `GET    /customer/search`                        - Nearest approved listings
/// - `GET    /provider/search`                        - Same operation, provider surface
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/provider/{provider_id}/listings",
            post(create_listing_handler).get(provider_listings_handler),
        )
        .route(
            "/listings/{listing_id}",
            get(get_listing_handler)
                .patch(update_listing_handler)
                .delete(delete_listing_handler),
        )
        .route(
            "/admin/listings/{listing_id}/approve",
            post(approve_listing_handler),
        )
        .route(
            "/admin/listings/{listing_id}/reject",
            post(reject_listing_handler),
        )
        .route("/categories", get(list_categories_handler))
        .route("/admin/categories", post(create_category_handler))
        .route("/customer/search", get(search_handler))
        .route("/provider/search", get(search_handler))
}
