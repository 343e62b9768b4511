use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;

use crate::storage::template::BlobStore;

/// Stores objects as plain files, with the object key used as the
/// relative path from the root directory.
///
/// The content type is not persisted.
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
    fn format_path(&self, key: &str) -> PathBuf {
        self.directory.join(key)
    }
}

#[async_trait]
impl BlobStore for FileSystemBackend {
    async fn put_object(&self, key: &str, data: Bytes, _content_type: &str) -> anyhow::Result<()> {
        let path = self.format_path(key);

        debug!("Storing image @ {:?}", &path);
        match tokio::fs::write(&path, &data).await {
            Ok(()) => Ok(()),
            Err(ref e) if e.kind() == ErrorKind::NotFound => {
                if let Some(parent) = path.parent() {
                    tokio::fs::create_dir_all(parent).await?;
                }
                tokio::fs::write(&path, data).await?;
                Ok(())
            },
            Err(other) => Err(other.into())
        }
    }

    async fn delete_object(&self, key: &str) -> anyhow::Result<()> {
        let path = self.format_path(key);

        debug!("Purging image @ {:?}", &path);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(ref e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(other) => Err(other.into()),
        }
    }
}
