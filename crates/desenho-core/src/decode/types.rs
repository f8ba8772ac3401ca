//! Core types for source image decoding.

use std::io::Cursor;

use image::{ImageReader, RgbaImage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The byte stream is not a recognized image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The image decoded to zero width or height.
    #[error("Image has no pixels")]
    EmptyImage,

    /// Pixel buffer length doesn't match the declared dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// The string is not a `data:<mime>;base64,<payload>` URL.
    #[error("Malformed data URL")]
    MalformedDataUrl,

    /// The data URL payload is not valid base64.
    #[error("Invalid base64 payload: {0}")]
    Base64(String),
}

/// Filter type for scaling the source onto the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation, closest to a browser canvas `drawImage`.
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// A decoded source image with RGBA pixel data.
///
/// The buffer is always `width * height * 4` bytes and both dimensions are
/// non-zero; every constructor checks this.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl SourceImage {
    /// Create a SourceImage from raw RGBA pixels (4 bytes per pixel, row-major).
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DecodeError> {
        if width == 0 || height == 0 {
            return Err(DecodeError::EmptyImage);
        }
        let expected = (width as usize) * (height as usize) * 4;
        if pixels.len() != expected {
            return Err(DecodeError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Decode PNG or JPEG bytes. The format is sniffed from the content.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::InvalidFormat` if the format can't be recognized,
    /// `DecodeError::CorruptedFile` if the decoder fails part way, and
    /// `DecodeError::EmptyImage` for a zero-sized image.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

        if reader.format().is_none() {
            return Err(DecodeError::InvalidFormat);
        }

        let img = reader
            .decode()
            .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

        Self::from_rgba_image(img.into_rgba8())
    }

    /// Decode the image carried by a `data:` URL.
    pub fn from_data_url(url: &str) -> Result<Self, DecodeError> {
        let data = super::decode_data_url(url)?;
        Self::decode(&data.bytes)
    }

    /// Create a SourceImage from an image::RgbaImage.
    pub fn from_rgba_image(img: RgbaImage) -> Result<Self, DecodeError> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    /// Copy the pixels into an image::RgbaImage for scaling.
    pub fn to_rgba_image(&self) -> RgbaImage {
        // Length was validated at construction, so from_raw always succeeds.
        RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA pixel data in row-major order.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Height divided by width.
    pub fn aspect_ratio(&self) -> f64 {
        self.height as f64 / self.width as f64
    }

    /// Returns true if any pixel is not fully opaque.
    pub fn has_transparency(&self) -> bool {
        self.pixels.chunks_exact(4).any(|px| px[3] != u8::MAX)
    }
}
