//! PostgreSQL implementation of the category repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Category, NewCategory};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;

/// PostgreSQL repository for the service category catalog.
pub struct PgCategoryRepository {
    pool: Arc<PgPool>,
}

impl PgCategoryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>, AppError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM service_categories ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(categories)
    }

    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO service_categories (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(&new_category.name)
        .bind(&new_category.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(category)
    }
}
