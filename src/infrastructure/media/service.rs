//! Media store trait and error types.

use async_trait::async_trait;

/// Errors that can occur while storing a media payload.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// Payload exceeds the configured size cap.
    #[error("payload of {size} bytes exceeds the {max} byte limit")]
    TooLarge { size: usize, max: usize },

    /// Content type is not one the store accepts.
    #[error("unsupported content type: {0}")]
    Unsupported(String),

    /// The backing store failed or is not configured.
    #[error("media store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// A binary payload handed to the media store.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Trait for the external blob store listings keep their images in.
///
/// The contract is deliberately small: accept a binary payload, return a
/// stable URL or fail. A failed upload aborts the whole create/update
/// request; there is no fallback to a listing without an image.
///
/// # Implementations
///
/// - [`crate::infrastructure::media::LocalMediaStore`] - disk-backed store served over `/media`
/// - [`crate::infrastructure::media::NullMediaStore`] - uploads fail closed (store disabled)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Stores the payload and returns the public URL it is reachable at.
    async fn upload(&self, upload: MediaUpload) -> MediaResult<String>;

    /// Whether the backing store is usable.
    ///
    /// Reported by the health endpoint; a disabled store is not an error.
    async fn health_check(&self) -> bool;
}
