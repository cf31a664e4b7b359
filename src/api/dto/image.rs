//! Inline image payload carried on create/update requests.

use base64::Engine as _;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::error::AppError;
use crate::infrastructure::media::MediaUpload;

/// A base64-encoded image riding the JSON body.
///
/// The upload protocol itself (multipart streaming, CDNs) is out of scope;
/// this is the minimal contract the media store needs: bytes plus a content
/// type.
#[derive(Debug, Deserialize, Validate)]
pub struct ImagePayload {
    /// MIME type of the payload, e.g. `image/jpeg`.
    #[validate(length(min = 1))]
    pub content_type: String,

    /// Base64-encoded (standard alphabet) file bytes.
    #[validate(length(min = 1))]
    pub data: String,
}

impl ImagePayload {
    /// Decodes the payload into the media store's input type.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the data is not valid base64.
    pub fn decode(self) -> Result<MediaUpload, AppError> {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(&self.data)
            .map_err(|e| {
                AppError::bad_request(
                    "Image data is not valid base64",
                    json!({ "reason": e.to_string() }),
                )
            })?;

        Ok(MediaUpload {
            bytes,
            content_type: self.content_type,
        })
    }
}
