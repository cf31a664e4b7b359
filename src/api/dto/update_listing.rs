//! DTO for the listing update endpoint.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_with::serde_as;
use validator::Validate;

use super::image::ImagePayload;
use crate::domain::entities::ListingPatch;
use crate::error::AppError;
use crate::infrastructure::media::MediaUpload;

/// Request body for `PATCH /api/listings/{listing_id}`.
///
/// All fields are optional; only provided fields are changed. Presence is
/// tagged, not inferred from nullability, so "unset" and "set to empty" stay
/// distinct.
///
/// # `description` semantics
///
/// - **Absent** (`description` not in JSON) → leave existing value unchanged
/// - **`null`** → clear the description
/// - **Text** → set it
///
/// The approval flag cannot be expressed here at all; edits never touch it.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateListingRequest {
    pub category_id: Option<i64>,

    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    /// Absent = no change, null = clear, value = set.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,

    pub price: Option<Decimal>,

    /// Fresh upload replacing the stored image URL.
    #[validate(nested)]
    pub image: Option<ImagePayload>,
}

impl UpdateListingRequest {
    /// Splits the request into the field patch and the optional image upload.
    pub fn into_parts(self) -> Result<(ListingPatch, Option<MediaUpload>), AppError> {
        let upload = self.image.map(ImagePayload::decode).transpose()?;

        let patch = ListingPatch {
            category_id: self.category_id,
            title: self.title,
            description: self.description,
            price: self.price,
            image_url: None,
        };

        Ok((patch, upload))
    }
}
