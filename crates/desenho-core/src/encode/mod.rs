//! Image encoding for export.
//!
//! This module provides functionality for:
//! - Encoding RGB surfaces to JPEG with a configurable quality factor
//! - Encoding RGBA surfaces to lossless PNG
//!
//! # Examples
//!
//! ```ignore
//! use desenho_core::encode::{encode_jpeg, encode_png};
//!
//! let white = vec![255u8; 100 * 100 * 3];
//! let jpeg_bytes = encode_jpeg(&white, 100, 100, 95).unwrap();
//!
//! let clear = vec![0u8; 100 * 100 * 4];
//! let png_bytes = encode_png(&clear, 100, 100).unwrap();
//! ```

mod jpeg;
mod png;

pub use jpeg::{encode_jpeg, JPEG_EXPORT_QUALITY};
pub use png::encode_png;

use thiserror::Error;

/// Errors that can occur during encoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * {channels}), got {actual}")]
    InvalidPixelData {
        expected: usize,
        actual: usize,
        channels: usize,
    },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying encoder failed
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: &'static str,
        message: String,
    },
}

/// Check that `pixels` holds exactly `width * height * channels` bytes.
fn validate_buffer(pixels: &[u8], width: u32, height: u32, channels: usize) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * channels;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
            channels,
        });
    }

    Ok(())
}
