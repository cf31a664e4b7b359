//! Handler for the category catalog.

use axum::{Json, extract::State};

use crate::api::dto::category::{CategoryListResponse, CategoryResponse};
use crate::domain::auth::AuthContext;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every service category.
///
/// # Endpoint
///
/// `GET /api/categories`
pub async fn list_categories_handler(
    _ctx: AuthContext,
    State(state): State<AppState>,
) -> Result<Json<CategoryListResponse>, AppError> {
    let categories = state.category_service.list_categories().await?;

    Ok(Json(CategoryListResponse {
        items: categories.into_iter().map(CategoryResponse::from).collect(),
    }))
}
