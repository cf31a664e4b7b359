//! DTO for the listing creation endpoint.

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use super::image::ImagePayload;

/// Request body for `POST /api/provider/{provider_id}/listings`.
///
/// There is no approval field to send: new listings are always created
/// unapproved and any such input would be ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateListingRequest {
    pub category_id: i64,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    pub description: Option<String>,

    /// Non-negative price; the currency is implied by the deployment.
    pub price: Decimal,

    /// Optional inline image, uploaded to the media store before the listing
    /// is persisted.
    #[validate(nested)]
    pub image: Option<ImagePayload>,
}
