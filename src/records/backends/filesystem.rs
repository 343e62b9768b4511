use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::records::template::RecordStore;
use crate::records::ImageRecord;

/// Writes each record as a standalone JSON document named after its id.
pub struct FileSystemBackend {
    directory: PathBuf,
}

impl FileSystemBackend {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            directory: dir,
        }
    }

    #[inline]
    fn format_path(&self, record: &ImageRecord) -> PathBuf {
        self.directory.join(format!("{}.json", record.id))
    }
}

#[async_trait]
impl RecordStore for FileSystemBackend {
    async fn put_record(&self, record: &ImageRecord) -> anyhow::Result<()> {
        let path = self.format_path(record);
        let data = serde_json::to_vec_pretty(record)?;

        debug!("Writing record @ {:?}", &path);
        match tokio::fs::write(&path, &data).await {
            Ok(()) => Ok(()),
            Err(ref e) if e.kind() == ErrorKind::NotFound => {
                tokio::fs::create_dir_all(&self.directory).await?;
                tokio::fs::write(&path, data).await?;
                Ok(())
            },
            Err(other) => Err(other.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    #[tokio::test]
    async fn test_record_written_as_json() -> anyhow::Result<()> {
        let root = std::env::temp_dir().join(format!("monochrome-records-{}", Uuid::new_v4()));
        let backend = FileSystemBackend::new(root.clone());

        let id = Uuid::new_v4();
        let record = ImageRecord::processed(id, format!("processed/{}.png", id), 10, "PNG", Utc::now());
        backend.put_record(&record).await?;

        let raw = tokio::fs::read(root.join(format!("{}.json", id))).await?;
        let loaded: ImageRecord = serde_json::from_slice(&raw)?;
        assert_eq!(loaded, record);

        tokio::fs::remove_dir_all(root).await?;
        Ok(())
    }
}
