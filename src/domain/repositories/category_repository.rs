//! Repository trait for the category catalog.

use crate::domain::entities::{Category, NewCategory};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for service categories.
///
/// Read-mostly: the catalog grows by admin creation only; there is no update
/// or delete operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Returns the whole catalog.
    async fn list_all(&self) -> Result<Vec<Category>, AppError>;

    /// Persists a new category and returns it with its assigned id.
    ///
    /// No uniqueness is enforced on the name; duplicates are permitted.
    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError>;
}
