use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Rgb};

/// The fixed output width of every processed image.
pub const OUTPUT_WIDTH: u32 = 512;

/// The fixed output height of every processed image.
pub const OUTPUT_HEIGHT: u32 = 512;

/// Converts a single pixel to its ITU-R 601-2 luma value.
///
/// Weights are the 16 bit fixed point forms of 0.299, 0.587 and 0.114,
/// rounded to nearest.
#[inline]
pub fn luma_601(px: &Rgb<u8>) -> u8 {
    let [r, g, b] = px.0;
    let l = r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000;
    (l >> 16) as u8
}

/// Converts the image into single channel grayscale using ITU-R 601-2 luma.
///
/// Any alpha channel is ignored.
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    let rgb = img.to_rgb8();
    ImageBuffer::from_fn(rgb.width(), rgb.height(), |x, y| {
        Luma([luma_601(rgb.get_pixel(x, y))])
    })
}

/// Converts the image into a single channel grayscale image and scales it
/// to the output dimensions.
///
/// Any alpha channel is dropped and the aspect ratio is not preserved.
pub fn grayscale_and_resize(img: &DynamicImage) -> DynamicImage {
    let luma = DynamicImage::ImageLuma8(to_grayscale(img));
    luma.resize_exact(OUTPUT_WIDTH, OUTPUT_HEIGHT, FilterType::CatmullRom)
}
