//! Repository trait for listing storage.

use crate::domain::entities::{GeoPoint, Listing, NewListing};
use crate::error::AppError;
use async_trait::async_trait;

/// Fixed result cap for nearest-listing queries.
///
/// A behavioral contract of the discovery engine, not a tuning knob.
pub const NEAREST_LIMIT: i64 = 20;

/// Repository interface for the durable listing record set.
///
/// Owns the approval flag: [`set_approval`](ListingRepository::set_approval)
/// is the only operation that writes `is_approved`;
/// [`update`](ListingRepository::update) deliberately excludes it.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgListingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Persists a new listing and returns it with its assigned id.
    ///
    /// The stored record is always unapproved, whatever the input carried.
    async fn create(&self, new_listing: NewListing) -> Result<Listing, AppError>;

    /// Point lookup by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Listing>, AppError>;

    /// All listings owned by a provider, approval state included.
    ///
    /// Row order is unspecified.
    async fn list_by_provider(&self, provider_id: i64) -> Result<Vec<Listing>, AppError>;

    /// Writes every mutable field of the listing except `is_approved` in a
    /// single statement. Last writer wins; there is no version check.
    ///
    /// Returns `None` if the row vanished between read and write.
    async fn update(&self, listing: &Listing) -> Result<Option<Listing>, AppError>;

    /// Sets the approval flag. Returns `None` if the listing does not exist.
    async fn set_approval(&self, id: i64, approved: bool) -> Result<Option<Listing>, AppError>;

    /// Permanently removes a listing. Returns whether a row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Approved listings in the category, ascending by great-circle distance
    /// from `point` to the owning provider's permanent location, truncated to
    /// `limit` rows.
    ///
    /// Distance uses the spherical law of cosines with Earth radius 6371 km
    /// (see [`crate::domain::entities::distance_km`]). Providers without a
    /// registered location are excluded. Order among equal distances is
    /// unspecified; callers must not depend on it.
    async fn find_nearest(
        &self,
        point: GeoPoint,
        category_id: i64,
        limit: i64,
    ) -> Result<Vec<Listing>, AppError>;
}
