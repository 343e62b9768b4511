use bytes::Bytes;

use crate::error::ProcessingError;

pub mod decoder;
pub mod encoder;
pub mod resizer;

/// The grayscale, fixed size output ready to be persisted.
pub struct ProcessedImage {
    /// The PNG encoded image.
    pub buff: Bytes,
}

impl ProcessedImage {
    #[inline]
    pub fn size(&self) -> usize {
        self.buff.len()
    }
}

/// Decodes the raw image bytes, converts them to grayscale, scales them
/// and encodes the result as a PNG.
///
/// This is CPU bound and should be run off of the async executor.
pub fn process_image(data: &[u8]) -> Result<ProcessedImage, ProcessingError> {
    let original = decoder::load_image(data)?;
    let img = resizer::grayscale_and_resize(&original);
    let buff = encoder::encode_png(&img).map_err(ProcessingError::Internal)?;

    Ok(ProcessedImage { buff })
}
