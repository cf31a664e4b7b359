//! Service category entity.

use sqlx::FromRow;

/// A flat catalog entry listings reference via `category_id`.
///
/// Names are not unique; the registry exposes no update or delete operation.
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Input data for creating a new category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
}
