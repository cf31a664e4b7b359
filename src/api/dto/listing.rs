//! Listing response DTOs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::entities::Listing;

/// JSON representation of a listing.
#[derive(Debug, Serialize)]
pub struct ListingResponse {
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

impl From<Listing> for ListingResponse {
    fn from(l: Listing) -> Self {
        Self {
            id: l.id,
            provider_id: l.provider_id,
            category_id: l.category_id,
            title: l.title,
            description: l.description,
            price: l.price,
            image_url: l.image_url,
            is_approved: l.is_approved,
            created_at: l.created_at,
        }
    }
}

/// Response containing an ordered list of listings.
#[derive(Debug, Serialize)]
pub struct ListingListResponse {
    pub items: Vec<ListingResponse>,
}

impl ListingListResponse {
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        Self {
            items: listings.into_iter().map(ListingResponse::from).collect(),
        }
    }
}
