//! Fail-closed media store used when no storage is configured.

use super::service::{MediaError, MediaResult, MediaStore, MediaUpload};
use async_trait::async_trait;
use tracing::debug;

/// A media store that rejects every upload.
///
/// Unlike a no-op cache, media storage cannot fail open: a listing must never
/// be persisted claiming an image that was silently dropped. With this store
/// installed, requests without an image payload work normally and requests
/// carrying one fail as a dependency error.
pub struct NullMediaStore;

impl NullMediaStore {
    pub fn new() -> Self {
        debug!("Using NullMediaStore (image uploads disabled)");
        Self
    }
}

impl Default for NullMediaStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaStore for NullMediaStore {
    async fn upload(&self, _upload: MediaUpload) -> MediaResult<String> {
        Err(MediaError::Unavailable(
            "media storage is not configured".to_string(),
        ))
    }

    async fn health_check(&self) -> bool {
        // Disabled on purpose is not unhealthy.
        true
    }
}
