use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod backends;
pub mod template;

/// The status written for every successfully processed image.
pub const STATUS_PROCESSED: &str = "processed";

/// The metadata persisted for a single processed image.
///
/// Records are written once and never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageRecord {
    #[serde(rename = "ID")]
    pub id: Uuid,

    /// The storage key of the processed image.
    pub filename: String,

    /// The UTC time the record was created in RFC 3339 format.
    pub timestamp: String,

    pub status: String,

    /// The exact size of the stored object in bytes.
    pub size: usize,

    pub format: String,
}

impl ImageRecord {
    pub fn processed(
        id: Uuid,
        filename: String,
        size: usize,
        format: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            filename,
            timestamp: created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            status: STATUS_PROCESSED.to_string(),
            size,
            format: format.to_string(),
        }
    }
}
