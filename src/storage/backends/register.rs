use std::path::PathBuf;
use std::sync::Arc;
use serde::Deserialize;

use crate::storage::template::BlobStore;

/// The destination bucket used when nothing else is configured.
pub const DEFAULT_BUCKET: &str = "serverless-image-s3-storage";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlobBackendConfig {
    S3 {
        bucket: String,
        #[serde(default)]
        region: Option<String>,
        #[serde(default)]
        endpoint: Option<String>,
    },
    FileSystem {
        directory: PathBuf,
    }
}

impl Default for BlobBackendConfig {
    fn default() -> Self {
        Self::S3 {
            bucket: DEFAULT_BUCKET.to_string(),
            region: None,
            endpoint: None,
        }
    }
}

impl BlobBackendConfig {
    pub fn connect(&self) -> anyhow::Result<Arc<dyn BlobStore>> {
        match self {
            Self::S3 { bucket, region, endpoint } => {
                let backend = super::blob_storage::BlobStorageBackend::new(
                    bucket.clone(),
                    region.as_deref(),
                    endpoint.as_deref(),
                )?;
                Ok(Arc::new(backend))
            },
            Self::FileSystem { directory } => {
                Ok(Arc::new(super::filesystem::FileSystemBackend::new(directory.clone())))
            }
        }
    }
}
