//! Object storage for uploaded files.
//!
//! Uploads are written under an object key (`{folder}/{name}`) and
//! addressed afterwards by a public URL. Two backends exist:
//!
//! - [`S3ObjectStore`]: any S3-compatible bucket.
//! - [`LocalObjectStore`]: a directory on disk, served by the API under
//!   `/uploads`.

mod config;
mod local;
mod s3;

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

pub use config::{LocalStorageConfig, S3StorageConfig, StorageConfig};
pub use local::LocalObjectStore;
pub use s3::S3ObjectStore;

/// Errors raised by storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid object key: {0}")]
    InvalidKey(String),

    #[error("Failed to store object: {0}")]
    StoreFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Destination for uploaded files.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `body` under `key` and return the URL it is reachable at.
    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<String>;
}

/// Construct the backend selected by `config`.
pub async fn build_store(config: &StorageConfig) -> Result<Arc<dyn ObjectStore>> {
    match config {
        StorageConfig::S3(s3) => Ok(Arc::new(S3ObjectStore::new(s3).await)),
        StorageConfig::Local(local) => Ok(Arc::new(
            LocalObjectStore::new(&local.dir, &local.public_url).await?,
        )),
    }
}

/// Reject keys that could escape the storage root or bucket prefix.
pub(crate) fn check_key(key: &str) -> Result<()> {
    let bad = key.is_empty()
        || key.starts_with('/')
        || key.contains('\\')
        || key.split('/').any(|segment| segment.is_empty() || segment == "." || segment == "..");
    if bad {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// Join a base URL and an object key with exactly one slash.
pub(crate) fn join_url(base: &str, key: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), key)
}
