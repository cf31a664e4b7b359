//! Handlers for provider listing management.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::create_listing::CreateListingRequest;
use crate::api::dto::image::ImagePayload;
use crate::api::dto::listing::{ListingListResponse, ListingResponse};
use crate::api::dto::update_listing::UpdateListingRequest;
use crate::application::services::ListingDraft;
use crate::domain::auth::AuthContext;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a listing for a provider.
///
/// # Endpoint
///
/// `POST /api/provider/{provider_id}/listings`
///
/// The created listing is always unapproved; it will not appear in discovery
/// results until an admin approves it. An inline image (base64) is uploaded
/// to the media store first; if that upload fails the listing is not
/// persisted.
///
/// # Errors
///
/// Returns 403 if the caller is neither the provider nor an admin.
/// Returns 404 if the provider id does not resolve to a user.
/// Returns 400 if validation fails.
/// Returns 502 if the media store or database fails.
pub async fn create_listing_handler(
    Path(provider_id): Path<i64>,
    ctx: AuthContext,
    State(state): State<AppState>,
    Json(payload): Json<CreateListingRequest>,
) -> Result<(StatusCode, Json<ListingResponse>), AppError> {
    payload.validate()?;

    let image = payload.image.map(ImagePayload::decode).transpose()?;

    let draft = ListingDraft {
        category_id: payload.category_id,
        title: payload.title,
        description: payload.description,
        price: payload.price,
    };

    let listing = state
        .listing_service
        .create_listing(ctx, provider_id, draft, image)
        .await?;

    Ok((StatusCode::CREATED, Json(listing.into())))
}

/// Lists all of a provider's listings, unapproved ones included.
///
/// # Endpoint
///
/// `GET /api/provider/{provider_id}/listings`
pub async fn provider_listings_handler(
    Path(provider_id): Path<i64>,
    _ctx: AuthContext,
    State(state): State<AppState>,
) -> Result<Json<ListingListResponse>, AppError> {
    let listings = state
        .listing_service
        .listings_by_provider(provider_id)
        .await?;

    Ok(Json(ListingListResponse::from_listings(listings)))
}

/// Retrieves a single listing by id, with no approval filtering.
///
/// # Endpoint
///
/// `GET /api/listings/{listing_id}`
///
/// # Errors
///
/// Returns 404 if the listing does not exist.
pub async fn get_listing_handler(
    Path(listing_id): Path<i64>,
    _ctx: AuthContext,
    State(state): State<AppState>,
) -> Result<Json<ListingResponse>, AppError> {
    let listing = state.listing_service.get_listing(listing_id).await?;

    Ok(Json(listing.into()))
}

/// Partially updates a listing.
///
/// # Endpoint
///
/// `PATCH /api/listings/{listing_id}`
///
/// Only provided fields are changed; `description: null` clears it. A fresh
/// image upload replaces the stored URL. The approval flag is never touched
/// by this endpoint, so an edit does not reset approval.
///
/// # Errors
///
/// Returns 404 if the listing does not exist.
/// Returns 403 if the caller is neither the owner nor an admin.
/// Returns 400 if validation fails.
pub async fn update_listing_handler(
    Path(listing_id): Path<i64>,
    ctx: AuthContext,
    State(state): State<AppState>,
    Json(payload): Json<UpdateListingRequest>,
) -> Result<Json<ListingResponse>, AppError> {
    payload.validate()?;

    let (patch, image) = payload.into_parts()?;

    let listing = state
        .listing_service
        .update_listing(ctx, listing_id, patch, image)
        .await?;

    Ok(Json(listing.into()))
}

/// Permanently deletes a listing.
///
/// # Endpoint
///
/// `DELETE /api/listings/{listing_id}`
///
/// Idempotent: deleting an id that was never created also returns 204, so
/// callers cannot distinguish that case.
///
/// # Errors
///
/// Returns 403 if the listing exists and the caller is neither the owner nor
/// an admin.
pub async fn delete_listing_handler(
    Path(listing_id): Path<i64>,
    ctx: AuthContext,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.listing_service.delete_listing(ctx, listing_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
