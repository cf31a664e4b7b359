//! Discovery service: proximity-ranked listing search.

use std::sync::Arc;

use crate::domain::entities::{GeoPoint, Listing};
use crate::domain::repositories::{ListingRepository, NEAREST_LIMIT};
use crate::error::AppError;

/// Read-only discovery over the listing store.
///
/// The same operation backs the customer- and provider-facing search
/// surfaces; no role-based filtering differs between them. It holds no state
/// and has no side effects.
pub struct SearchService<L: ListingRepository> {
    listing_repository: Arc<L>,
}

impl<L: ListingRepository> SearchService<L> {
    /// Creates a new search service.
    pub fn new(listing_repository: Arc<L>) -> Self {
        Self { listing_repository }
    }

    /// Approved listings in the category, nearest provider first, capped at
    /// [`NEAREST_LIMIT`] results.
    ///
    /// Unapproved listings and providers without a registered permanent
    /// location never appear.
    pub async fn find_nearest(
        &self,
        point: GeoPoint,
        category_id: i64,
    ) -> Result<Vec<Listing>, AppError> {
        self.listing_repository
            .find_nearest(point, category_id, NEAREST_LIMIT)
            .await
    }
}
