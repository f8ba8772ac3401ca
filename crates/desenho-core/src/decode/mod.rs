//! Source image decoding for the export pipeline.
//!
//! This module provides functionality for:
//! - Decoding PNG and JPEG bytes into RGBA pixel memory
//! - Unpacking `data:` URLs as returned by the generation service
//!
//! # Architecture
//!
//! Decoding is synchronous. The asynchronous part (fetching the bytes) lives in
//! the WASM bindings, which hand the finished bytes to this module.
//!
//! # Examples
//!
//! ```ignore
//! use desenho_core::decode::SourceImage;
//!
//! let png_bytes = std::fs::read("arca.png").unwrap();
//! let image = SourceImage::decode(&png_bytes).unwrap();
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```

mod data_url;
mod types;

pub use data_url::{decode_data_url, encode_data_url, DataUrl};
pub use types::{DecodeError, FilterType, SourceImage};
