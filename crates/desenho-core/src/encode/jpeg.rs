//! JPEG encoding for export.
//!
//! JPEG has no alpha channel, so callers flatten their surface to RGB first.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;

use super::{validate_buffer, EncodeError};

/// Quality used for every JPEG download (0.95 on the canvas scale).
pub const JPEG_EXPORT_QUALITY: u8 = 95;

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality, clamped to 1-100
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for a zero dimension,
/// `EncodeError::InvalidPixelData` for a buffer of the wrong length, and
/// `EncodeError::EncodingFailed` if the encoder itself fails.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    validate_buffer(pixels, width, height, 3)?;

    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100))
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed {
            format: "JPEG",
            message: e.to_string(),
        })?;

    Ok(out)
}
