use std::io::Cursor;

use bytes::Bytes;
use image::{DynamicImage, ImageFormat};

/// The name recorded alongside every stored image.
pub const OUTPUT_FORMAT_NAME: &str = "PNG";

/// The file extension used for stored images.
pub const OUTPUT_EXTENSION: &str = "png";

#[inline]
pub fn encode_png(img: &DynamicImage) -> anyhow::Result<Bytes> {
    let mut buff = Cursor::new(Vec::new());
    img.write_to(&mut buff, ImageFormat::Png)?;
    Ok(Bytes::from(buff.into_inner()))
}
