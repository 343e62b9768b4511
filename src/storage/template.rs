use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait BlobStore: Sync + Send + 'static {
    async fn put_object(
        &self,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> anyhow::Result<()>;

    async fn delete_object(&self, key: &str) -> anyhow::Result<()>;
}
