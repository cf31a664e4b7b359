//! Listing entity: a provider's published service offering.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// A service listing owned by a provider and gated by an approval flag.
///
/// `is_approved` starts false and is changed only by the admin approval
/// operation, never by the provider's own create or update calls. Only
/// approved listings appear in discovery results.
#[derive(Debug, Clone, FromRow)]
pub struct Listing {
    pub id: i64,
    pub provider_id: i64,
    pub category_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Applies a partial update in place.
    ///
    /// Absent fields are left unchanged. `is_approved`, `id`, `provider_id`,
    /// and `created_at` are not representable in a patch and never move.
    pub fn apply(&mut self, patch: ListingPatch) {
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = Some(image_url);
        }
    }
}

/// Input data for creating a new listing.
///
/// There is deliberately no approval field: new listings are always persisted
/// unapproved, regardless of the creation input.
#[derive(Debug, Clone)]
pub struct NewListing {
    pub provider_id: i64,
    pub category_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
}

/// Partial update for an existing listing.
///
/// `None` fields are left unchanged.
/// `description: Some(None)` clears the description; `Some(Some(text))` sets it.
/// A new `image_url` always replaces the old one; there is no clear path,
/// uploads are write-once URLs.
#[derive(Debug, Clone, Default)]
pub struct ListingPatch {
    pub category_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<Decimal>,
    pub image_url: Option<String>,
}
