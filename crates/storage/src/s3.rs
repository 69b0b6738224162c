//! S3-compatible object store.

use async_trait::async_trait;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use tracing::debug;

use crate::config::S3StorageConfig;
use crate::{check_key, ObjectStore, Result, StorageError};

/// Stores uploads as objects in a bucket.
pub struct S3ObjectStore {
    client: Client,
    config: S3StorageConfig,
}

impl S3ObjectStore {
    /// Build a client for the configured bucket.
    ///
    /// Explicit keys take precedence; otherwise the default AWS credential
    /// chain is used.
    pub async fn new(config: &S3StorageConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if let (Some(key_id), Some(secret)) = (&config.access_key_id, &config.secret_access_key) {
            loader = loader.credentials_provider(Credentials::new(
                key_id.clone(),
                secret.clone(),
                None,
                None,
                "popevents-env",
            ));
        }

        let shared = loader.load().await;
        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(endpoint) = &config.endpoint {
            // Path-style addressing is required by most S3-compatible services.
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self {
            client: Client::from_conf(builder.build()),
            config: config.clone(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<String> {
        check_key(key)?;
        let size = body.len();

        self.client
            .put_object()
            .bucket(&self.config.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| StorageError::StoreFailed(format!("S3 put_object failed: {e}")))?;

        debug!(bucket = %self.config.bucket, key, size, "Stored object in S3");
        Ok(self.config.object_url(key))
    }
}
