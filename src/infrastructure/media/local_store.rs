//! Disk-backed media store.

use super::service::{MediaError, MediaResult, MediaStore, MediaUpload};
use async_trait::async_trait;
use rand::{Rng, distr::Alphanumeric};
use std::path::PathBuf;

/// Length of the random object key in the stored file name.
const OBJECT_KEY_LENGTH: usize = 16;

/// Media store writing payloads to a local directory.
///
/// Stored files are served back by the HTTP layer under `/media`, so the
/// returned URL is `{public_base_url}/media/{key}.{ext}`. Suitable for
/// single-node deployments; swap in another [`MediaStore`] implementation
/// for object storage.
pub struct LocalMediaStore {
    root: PathBuf,
    public_base_url: String,
    max_bytes: usize,
}

impl LocalMediaStore {
    /// Creates the store, ensuring the target directory exists.
    pub async fn create(
        root: PathBuf,
        public_base_url: String,
        max_bytes: usize,
    ) -> MediaResult<Self> {
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|e| MediaError::Unavailable(e.to_string()))?;

        Ok(Self {
            root,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            max_bytes,
        })
    }

    fn extension_for(content_type: &str) -> MediaResult<&'static str> {
        match content_type {
            "image/jpeg" => Ok("jpg"),
            "image/png" => Ok("png"),
            "image/webp" => Ok("webp"),
            "image/gif" => Ok("gif"),
            other => Err(MediaError::Unsupported(other.to_string())),
        }
    }

    fn generate_key() -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(OBJECT_KEY_LENGTH)
            .map(char::from)
            .collect()
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn upload(&self, upload: MediaUpload) -> MediaResult<String> {
        if upload.bytes.len() > self.max_bytes {
            return Err(MediaError::TooLarge {
                size: upload.bytes.len(),
                max: self.max_bytes,
            });
        }

        let ext = Self::extension_for(&upload.content_type)?;
        let file_name = format!("{}.{ext}", Self::generate_key());
        let path = self.root.join(&file_name);

        tokio::fs::write(&path, &upload.bytes)
            .await
            .map_err(|e| MediaError::Unavailable(e.to_string()))?;

        tracing::debug!(file = %file_name, bytes = upload.bytes.len(), "Stored media object");

        Ok(format!("{}/media/{file_name}", self.public_base_url))
    }

    async fn health_check(&self) -> bool {
        tokio::fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }
}
