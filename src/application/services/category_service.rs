//! Category catalog service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::auth::AuthContext;
use crate::domain::entities::{Category, NewCategory};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;

/// Service over the flat category catalog.
///
/// Read by everyone; grown by admins. No update or delete is exposed.
pub struct CategoryService<C: CategoryRepository> {
    category_repository: Arc<C>,
}

impl<C: CategoryRepository> CategoryService<C> {
    /// Creates a new category service.
    pub fn new(category_repository: Arc<C>) -> Self {
        Self { category_repository }
    }

    /// Returns the whole catalog.
    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.category_repository.list_all().await
    }

    /// Creates a category. Admin only.
    ///
    /// Duplicate names are allowed; the catalog has no uniqueness rule.
    ///
    /// # Errors
    ///
    /// - [`AppError::Forbidden`] if the caller is not an admin
    /// - [`AppError::Validation`] for an empty name
    pub async fn create_category(
        &self,
        ctx: AuthContext,
        new_category: NewCategory,
    ) -> Result<Category, AppError> {
        ctx.require_admin()?;

        if new_category.name.trim().is_empty() {
            return Err(AppError::bad_request(
                "Category name must not be empty",
                json!({}),
            ));
        }

        let category = self.category_repository.create(new_category).await?;
        tracing::info!(category_id = category.id, name = %category.name, "Category created");

        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::{AuthContext, Role};
    use crate::domain::repositories::MockCategoryRepository;

    #[tokio::test]
    async fn test_create_category_requires_admin() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_create().times(0);

        let service = CategoryService::new(Arc::new(categories));

        let result = service
            .create_category(
                AuthContext::new(5, Role::Provider),
                NewCategory {
                    name: "Plumbing".to_string(),
                    description: None,
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_create_category_rejects_blank_name() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_create().times(0);

        let service = CategoryService::new(Arc::new(categories));

        let result = service
            .create_category(
                AuthContext::new(1, Role::Admin),
                NewCategory {
                    name: "   ".to_string(),
                    description: None,
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_category_as_admin() {
        let mut categories = MockCategoryRepository::new();

        categories
            .expect_create()
            .withf(|c| c.name == "Plumbing")
            .times(1)
            .returning(|c| {
                Ok(Category {
                    id: 1,
                    name: c.name.clone(),
                    description: c.description.clone(),
                })
            });

        let service = CategoryService::new(Arc::new(categories));

        let category = service
            .create_category(
                AuthContext::new(1, Role::Admin),
                NewCategory {
                    name: "Plumbing".to_string(),
                    description: Some("Pipes and taps".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(category.id, 1);
        assert_eq!(category.name, "Plumbing");
    }
}
