//! Media blob storage: trait and implementations.

mod local_store;
mod null_store;
mod service;

pub use local_store::LocalMediaStore;
pub use null_store::NullMediaStore;
pub use service::{MediaError, MediaResult, MediaStore, MediaUpload};

#[cfg(test)]
pub use service::MockMediaStore;
