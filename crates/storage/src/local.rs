//! Directory-backed object store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use crate::{check_key, join_url, ObjectStore, Result};

/// Writes uploads below a base directory.
pub struct LocalObjectStore {
    base_path: PathBuf,
    public_url: String,
}

impl LocalObjectStore {
    /// Create the store, creating `base_path` if it doesn't exist.
    pub async fn new(base_path: impl AsRef<Path>, public_url: &str) -> Result<Self> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).await?;
        Ok(Self {
            base_path,
            public_url: public_url.to_string(),
        })
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn put(&self, key: &str, body: Bytes, _content_type: &str) -> Result<String> {
        check_key(key)?;
        let path = self.base_path.join(key);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        // Write to a temp file then rename so readers never see partial files.
        let temp_path = path.with_extension("part");
        fs::write(&temp_path, &body).await?;
        fs::rename(&temp_path, &path).await?;

        debug!(path = %path.display(), size = body.len(), "Stored upload on disk");
        Ok(join_url(&self.public_url, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StorageError;

    #[tokio::test]
    async fn put_writes_file_and_returns_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path(), "http://localhost:3000/uploads/")
            .await
            .unwrap();

        let url = store
            .put("portfolio/1-abc.png", Bytes::from_static(b"png"), "image/png")
            .await
            .unwrap();

        assert_eq!(url, "http://localhost:3000/uploads/portfolio/1-abc.png");
        let written = std::fs::read(dir.path().join("portfolio/1-abc.png")).unwrap();
        assert_eq!(written, b"png");
    }

    #[tokio::test]
    async fn put_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path(), "http://x/uploads").await.unwrap();

        let err = store
            .put("../escape.png", Bytes::from_static(b"x"), "image/png")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
    }
}
