//! Lossless PNG encoding for export. Alpha is kept as-is.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;

use super::{validate_buffer, EncodeError};

/// Encode RGBA pixel data to PNG bytes with the default compression settings.
///
/// # Errors
///
/// Same validation as [`super::encode_jpeg`], with a 4-byte-per-pixel buffer.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    validate_buffer(pixels, width, height, 4)?;

    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed {
            format: "PNG",
            message: e.to_string(),
        })?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_signature() {
        let pixels = vec![0u8; 10 * 10 * 4];
        let png = encode_png(&pixels, 10, 10).unwrap();
        assert_eq!(&png[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_is_lossless() {
        let pixels: Vec<u8> = (0..5 * 7 * 4).map(|i| (i * 13 % 256) as u8).collect();
        let png = encode_png(&pixels, 5, 7).unwrap();

        let decoded = image::load_from_memory(&png).unwrap().into_rgba8();
        assert_eq!(decoded.dimensions(), (5, 7));
        assert_eq!(decoded.into_raw(), pixels);
    }

    #[test]
    fn test_encode_png_rejects_rgb_buffer() {
        let pixels = vec![0u8; 10 * 10 * 3];
        let result = encode_png(&pixels, 10, 10);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }
}
