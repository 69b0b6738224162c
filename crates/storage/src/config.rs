//! Storage backend selection from environment variables.

/// Default region used when `STORAGE_REGION` is unset.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default directory for the local backend.
pub const DEFAULT_UPLOAD_DIR: &str = "./uploads";

/// Settings for an S3-compatible bucket.
#[derive(Debug, Clone)]
pub struct S3StorageConfig {
    pub bucket: String,
    /// Custom endpoint for S3-compatible services (MinIO, R2, Spaces).
    pub endpoint: Option<String>,
    pub region: String,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    /// Base URL objects are served from, if not the bucket itself.
    pub public_url: Option<String>,
}

impl S3StorageConfig {
    /// Public URL of an object under this bucket.
    pub fn object_url(&self, key: &str) -> String {
        if let Some(base) = &self.public_url {
            return crate::join_url(base, key);
        }
        match &self.endpoint {
            Some(endpoint) => crate::join_url(&crate::join_url(endpoint, &self.bucket), key),
            None => format!("https://{}.s3.{}.amazonaws.com/{key}", self.bucket, self.region),
        }
    }
}

/// Settings for the on-disk backend.
#[derive(Debug, Clone)]
pub struct LocalStorageConfig {
    pub dir: String,
    pub public_url: String,
}

/// Which storage backend to use.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    S3(S3StorageConfig),
    Local(LocalStorageConfig),
}

impl StorageConfig {
    /// Load from environment variables.
    ///
    /// | Env var                     | Default               |
    /// |-----------------------------|-----------------------|
    /// | `STORAGE_BUCKET`            | unset: local backend  |
    /// | `STORAGE_ENDPOINT`          | AWS                   |
    /// | `STORAGE_REGION`            | `us-east-1`           |
    /// | `STORAGE_ACCESS_KEY_ID`     | default AWS chain     |
    /// | `STORAGE_SECRET_ACCESS_KEY` | default AWS chain     |
    /// | `STORAGE_PUBLIC_URL`        | derived from bucket   |
    /// | `UPLOAD_DIR`                | `./uploads`           |
    /// | `UPLOAD_PUBLIC_URL`         | `{site_url}/uploads`  |
    pub fn from_env(site_url: &str) -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        match var("STORAGE_BUCKET") {
            Some(bucket) => Self::S3(S3StorageConfig {
                bucket,
                endpoint: var("STORAGE_ENDPOINT"),
                region: var("STORAGE_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
                access_key_id: var("STORAGE_ACCESS_KEY_ID"),
                secret_access_key: var("STORAGE_SECRET_ACCESS_KEY"),
                public_url: var("STORAGE_PUBLIC_URL"),
            }),
            None => Self::Local(LocalStorageConfig {
                dir: var("UPLOAD_DIR").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
                public_url: var("UPLOAD_PUBLIC_URL")
                    .unwrap_or_else(|| crate::join_url(site_url, "uploads")),
            }),
        }
    }

    /// Directory the API should serve under `/uploads`, if any.
    pub fn local_dir(&self) -> Option<&str> {
        match self {
            Self::Local(local) => Some(&local.dir),
            Self::S3(_) => None,
        }
    }
}
