//! Handler for proximity-ranked listing discovery.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::listing::ListingListResponse;
use crate::api::dto::search::SearchQuery;
use crate::domain::auth::AuthContext;
use crate::domain::entities::GeoPoint;
use crate::error::AppError;
use crate::state::AppState;

/// Finds approved listings in a category, nearest provider first.
///
/// # Endpoint
///
/// `GET /api/customer/search` and `GET /api/provider/search`. The two search
/// surfaces are deliberately the same operation; neither filters differently
/// by role.
///
/// # Query Parameters
///
/// - `lat`, `lng` - the query point in degrees
/// - `category_id` - the category to search within
///
/// At most 20 results are returned, ascending by great-circle distance from
/// the query point to each listing's provider location. Unapproved listings
/// and providers without a registered location never appear.
pub async fn search_handler(
    _ctx: AuthContext,
    Query(query): Query<SearchQuery>,
    State(state): State<AppState>,
) -> Result<Json<ListingListResponse>, AppError> {
    query.validate()?;

    let listings = state
        .search_service
        .find_nearest(GeoPoint::new(query.lat, query.lng), query.category_id)
        .await?;

    Ok(Json(ListingListResponse::from_listings(listings)))
}
