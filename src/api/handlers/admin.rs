//! Handlers for administrative operations.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::category::{CategoryResponse, CreateCategoryRequest};
use crate::api::dto::listing::ListingResponse;
use crate::domain::auth::AuthContext;
use crate::domain::entities::NewCategory;
use crate::error::AppError;
use crate::state::AppState;

/// Approves a listing, making it visible in discovery results.
///
/// # Endpoint
///
/// `POST /api/admin/listings/{listing_id}/approve`
///
/// # Errors
///
/// Returns 403 if the caller is not an admin.
/// Returns 404 if the listing does not exist.
pub async fn approve_listing_handler(
    Path(listing_id): Path<i64>,
    ctx: AuthContext,
    State(state): State<AppState>,
) -> Result<Json<ListingResponse>, AppError> {
    let listing = state
        .listing_service
        .set_approval(ctx, listing_id, true)
        .await?;

    Ok(Json(listing.into()))
}

/// Rejects a listing, removing it from discovery results.
///
/// # Endpoint
///
/// `POST /api/admin/listings/{listing_id}/reject`
///
/// # Errors
///
/// Returns 403 if the caller is not an admin.
/// Returns 404 if the listing does not exist.
pub async fn reject_listing_handler(
    Path(listing_id): Path<i64>,
    ctx: AuthContext,
    State(state): State<AppState>,
) -> Result<Json<ListingResponse>, AppError> {
    let listing = state
        .listing_service
        .set_approval(ctx, listing_id, false)
        .await?;

    Ok(Json(listing.into()))
}

/// Creates a service category.
///
/// # Endpoint
///
/// `POST /api/admin/categories`
///
/// # Errors
///
/// Returns 403 if the caller is not an admin.
/// Returns 400 if validation fails.
pub async fn create_category_handler(
    ctx: AuthContext,
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), AppError> {
    payload.validate()?;

    let category = state
        .category_service
        .create_category(
            ctx,
            NewCategory {
                name: payload.name,
                description: payload.description,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(category.into())))
}
