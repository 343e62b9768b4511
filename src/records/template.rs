use async_trait::async_trait;

use crate::records::ImageRecord;

#[async_trait]
pub trait RecordStore: Sync + Send + 'static {
    async fn put_record(&self, record: &ImageRecord) -> anyhow::Result<()>;
}
