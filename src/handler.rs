use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::error::{DecodeError, ProcessingError};
use crate::event::{HandlerResponse, ImageEvent};
use crate::processor::{self, decoder, encoder};
use crate::records::template::RecordStore;
use crate::records::ImageRecord;
use crate::storage::{self, template::BlobStore};

/// The outcome of a successful invocation.
#[derive(Debug, Clone)]
pub struct StoredImage {
    /// The generated ID for the image.
    pub image_id: Uuid,

    /// The key the processed image was stored under.
    pub key: String,

    /// The size of the stored image in bytes.
    pub size: usize,
}

pub struct ImageHandler {
    blobs: Arc<dyn BlobStore>,
    records: Arc<dyn RecordStore>,
    cleanup_orphans: bool,
}

impl ImageHandler {
    pub fn new(blobs: Arc<dyn BlobStore>, records: Arc<dyn RecordStore>) -> Self {
        Self {
            blobs,
            records,
            cleanup_orphans: false,
        }
    }

    /// Delete the stored image again when its record cannot be written.
    pub fn with_orphan_cleanup(mut self, enabled: bool) -> Self {
        self.cleanup_orphans = enabled;
        self
    }

    /// Runs a single invocation, translating any failure into
    /// a generic error response.
    pub async fn handle(&self, event: ImageEvent) -> HandlerResponse {
        match self.process(event).await {
            Ok(stored) => {
                info!(image_id = %stored.image_id, size = stored.size, "Image processed and stored: {}", &stored.key);
                HandlerResponse::ok(format!("Image processed and stored as {}", stored.key))
            },
            Err(e) => {
                error!(kind = e.kind(), "Error: {}", e);
                HandlerResponse::internal_error(format!("Error processing image: {}", e))
            },
        }
    }

    /// Decodes, transforms and persists the image carried by the event.
    ///
    /// Nothing is written unless the payload decodes into a valid image.
    pub async fn process(&self, event: ImageEvent) -> Result<StoredImage, ProcessingError> {
        let body = event.body.ok_or(DecodeError::MissingBody)?;
        let data = decoder::decode_payload(&body)?;

        let processed = tokio::task::spawn_blocking(move || processor::process_image(&data))
            .await
            .map_err(|e| ProcessingError::Internal(e.into()))??;

        let image_id = Uuid::new_v4();
        let key = storage::processed_key(image_id, encoder::OUTPUT_EXTENSION);
        let size = processed.size();

        self.blobs
            .put_object(&key, processed.buff, mime::IMAGE_PNG.essence_str())
            .await
            .map_err(ProcessingError::StorageWrite)?;

        let record = ImageRecord::processed(
            image_id,
            key.clone(),
            size,
            encoder::OUTPUT_FORMAT_NAME,
            Utc::now(),
        );

        if let Err(e) = self.records.put_record(&record).await {
            if self.cleanup_orphans {
                self.purge_orphan(&key).await;
            }
            return Err(ProcessingError::RecordWrite(e));
        }

        Ok(StoredImage { image_id, key, size })
    }

    async fn purge_orphan(&self, key: &str) {
        match self.blobs.delete_object(key).await {
            Ok(()) => info!("Removed orphaned image {} after failed record write", key),
            Err(e) => warn!("Failed to remove orphaned image {}: {:#}", key, e),
        }
    }
}
