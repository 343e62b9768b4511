use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use rusoto_s3::{DeleteObjectRequest, PutObjectRequest, S3Client, S3};

use crate::storage::template::BlobStore;
use crate::utils::resolve_region;

pub struct BlobStorageBackend {
    bucket: String,
    client: S3Client,
}

impl BlobStorageBackend {
    pub fn new(bucket: String, region: Option<&str>, endpoint: Option<&str>) -> Result<Self> {
        let region = resolve_region(region, endpoint)?;
        let client = S3Client::new(region);

        Ok(Self { bucket, client })
    }
}

#[async_trait]
impl BlobStore for BlobStorageBackend {
    #[instrument(skip(self, data), level = "debug")]
    async fn put_object(&self, key: &str, data: Bytes, content_type: &str) -> Result<()> {
        debug!("Storing image in bucket @ {}", key);

        let request = PutObjectRequest {
            bucket: self.bucket.clone(),
            key: key.to_string(),
            body: Some(data.to_vec().into()),
            content_length: Some(data.len() as i64),
            content_type: Some(content_type.to_string()),
            ..Default::default()
        };

        self.client.put_object(request).await?;
        Ok(())
    }

    #[instrument(skip(self), level = "debug")]
    async fn delete_object(&self, key: &str) -> Result<()> {
        debug!("Purging image in bucket @ {}", key);

        let request = DeleteObjectRequest {
            bucket: self.bucket.clone(),
            key: key.to_string(),
            ..Default::default()
        };

        self.client.delete_object(request).await?;
        Ok(())
    }
}
