use std::path::Path;

use serde::Deserialize;

use crate::records::backends::RecordBackendConfig;
use crate::storage::backends::BlobBackendConfig;

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    /// Where processed images are written.
    ///
    /// Defaults to the `serverless-image-s3-storage` S3 bucket.
    pub storage: BlobBackendConfig,

    #[serde(default)]
    /// Where image records are written.
    ///
    /// Defaults to the `Images` DynamoDB table.
    pub records: RecordBackendConfig,

    #[serde(default)]
    /// Remove the stored image again if its record could not be written.
    ///
    /// When disabled the image is left in storage without a record.
    ///
    /// Defaults to `false`.
    pub cleanup_orphans: bool,
}

impl RuntimeConfig {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_yaml(&data)
    }

    pub fn from_yaml(data: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(data)?)
    }

    /// Replaces the destination bucket and table names.
    ///
    /// Overrides only apply to the remote backends, filesystem backends
    /// keep their directories.
    pub fn with_overrides(mut self, bucket: Option<String>, table: Option<String>) -> Self {
        if let Some(name) = bucket {
            match &mut self.storage {
                BlobBackendConfig::S3 { bucket, .. } => *bucket = name,
                BlobBackendConfig::FileSystem { .. } => {
                    warn!("Ignoring bucket override {:?} for filesystem storage", name);
                },
            }
        }

        if let Some(name) = table {
            match &mut self.records {
                RecordBackendConfig::DynamoDb { table, .. } => *table = name,
                RecordBackendConfig::FileSystem { .. } => {
                    warn!("Ignoring table override {:?} for filesystem records", name);
                },
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    const AWS_CONFIG: &str = include_str!("../tests/configs/aws.yaml");
    const LOCAL_CONFIG: &str = include_str!("../tests/configs/local.yaml");

    #[test]
    fn test_default_destinations() {
        let cfg = RuntimeConfig::from_yaml("{}").unwrap();
        assert_eq!(cfg, RuntimeConfig::default());
        assert_eq!(
            cfg.storage,
            BlobBackendConfig::S3 {
                bucket: "serverless-image-s3-storage".to_string(),
                region: None,
                endpoint: None,
            },
        );
        assert_eq!(
            cfg.records,
            RecordBackendConfig::DynamoDb {
                table: "Images".to_string(),
                region: None,
                endpoint: None,
            },
        );
        assert!(!cfg.cleanup_orphans);
    }

    #[test]
    fn test_aws_config() {
        let cfg = RuntimeConfig::from_yaml(AWS_CONFIG).unwrap();
        assert_eq!(
            cfg.storage,
            BlobBackendConfig::S3 {
                bucket: "staging-processed-images".to_string(),
                region: Some("eu-west-1".to_string()),
                endpoint: None,
            },
        );
        assert_eq!(
            cfg.records,
            RecordBackendConfig::DynamoDb {
                table: "StagingImages".to_string(),
                region: Some("eu-west-1".to_string()),
                endpoint: Some("http://localhost:8000".to_string()),
            },
        );
        assert!(cfg.cleanup_orphans);
    }

    #[test]
    fn test_local_config_ignores_overrides() {
        let cfg = RuntimeConfig::from_yaml(LOCAL_CONFIG)
            .unwrap()
            .with_overrides(Some("other".to_string()), Some("Other".to_string()));

        assert_eq!(
            cfg.storage,
            BlobBackendConfig::FileSystem { directory: PathBuf::from("data/objects") },
        );
        assert_eq!(
            cfg.records,
            RecordBackendConfig::FileSystem { directory: PathBuf::from("data/records") },
        );
    }

    #[test]
    fn test_overrides_replace_destinations() {
        let cfg = RuntimeConfig::default()
            .with_overrides(Some("prod-images".to_string()), Some("ProdImages".to_string()));

        assert!(matches!(cfg.storage, BlobBackendConfig::S3 { ref bucket, .. } if bucket == "prod-images"));
        assert!(matches!(cfg.records, RecordBackendConfig::DynamoDb { ref table, .. } if table == "ProdImages"));
    }
}
