pub mod backends;
pub mod template;

/// The prefix every processed image is stored under.
pub const PROCESSED_PREFIX: &str = "processed";

/// Builds the storage key for a processed image.
#[inline]
pub fn processed_key(image_id: uuid::Uuid, extension: &str) -> String {
    format!("{}/{}.{}", PROCESSED_PREFIX, image_id, extension)
}
