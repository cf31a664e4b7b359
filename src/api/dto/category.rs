//! DTOs for the category catalog.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Category;

/// JSON representation of a category.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
        }
    }
}

/// Response containing the whole catalog.
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub items: Vec<CategoryResponse>,
}

/// Request body for `POST /api/admin/categories`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    pub description: Option<String>,
}
