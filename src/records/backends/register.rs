use std::path::PathBuf;
use std::sync::Arc;
use serde::Deserialize;

use crate::records::template::RecordStore;

/// The metadata table used when nothing else is configured.
pub const DEFAULT_TABLE: &str = "Images";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordBackendConfig {
    DynamoDb {
        table: String,
        #[serde(default)]
        region: Option<String>,
        #[serde(default)]
        endpoint: Option<String>,
    },
    FileSystem {
        directory: PathBuf,
    }
}

impl Default for RecordBackendConfig {
    fn default() -> Self {
        Self::DynamoDb {
            table: DEFAULT_TABLE.to_string(),
            region: None,
            endpoint: None,
        }
    }
}

impl RecordBackendConfig {
    pub fn connect(&self) -> anyhow::Result<Arc<dyn RecordStore>> {
        match self {
            Self::DynamoDb { table, region, endpoint } => {
                let backend = super::dynamodb::DynamoDbBackend::new(
                    table.clone(),
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
