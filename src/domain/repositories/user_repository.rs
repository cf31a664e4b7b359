//! Repository trait for read-only user lookups.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to user records.
///
/// Account lifecycle belongs to the identity provider; this service only
/// resolves provider ids and their permanent location.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Point lookup by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;
}
