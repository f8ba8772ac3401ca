//! WASM-compatible wrapper types for export data.
//!
//! This module provides JavaScript-friendly types that wrap the core Desenho
//! types, handling the conversion between Rust and JavaScript representations.

use desenho_core::decode::{FilterType, SourceImage};
use desenho_core::export::{ExportFormat, ExportRequest, ExportResult, PaperSize, UnknownOption};
use wasm_bindgen::prelude::*;

/// A decoded source image held in WASM memory.
#[wasm_bindgen]
pub struct JsSourceImage {
    inner: SourceImage,
}

#[wasm_bindgen]
impl JsSourceImage {
    /// Decode PNG or JPEG bytes.
    #[wasm_bindgen(constructor)]
    pub fn new(bytes: &[u8]) -> Result<JsSourceImage, JsValue> {
        SourceImage::decode(bytes)
            .map(JsSourceImage::from_source)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Decode the image inside a `data:` URL.
    pub fn from_data_url(url: &str) -> Result<JsSourceImage, JsValue> {
        SourceImage::from_data_url(url)
            .map(JsSourceImage::from_source)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Whether any pixel is not fully opaque.
    #[wasm_bindgen(getter)]
    pub fn has_transparency(&self) -> bool {
        self.inner.has_transparency()
    }
}

impl JsSourceImage {
    pub(crate) fn from_source(inner: SourceImage) -> Self {
        Self { inner }
    }

    pub(crate) fn source(&self) -> &SourceImage {
        &self.inner
    }
}

/// An encoded download.
///
/// `bytes()` copies the encoded file into a new `Uint8Array`.
#[wasm_bindgen]
pub struct JsExportResult {
    inner: ExportResult,
}

#[wasm_bindgen]
impl JsExportResult {
    #[wasm_bindgen(getter)]
    pub fn filename(&self) -> String {
        self.inner.filename.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.inner.mime_type().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.bytes.len()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes.clone()
    }

    pub fn data_url(&self) -> String {
        self.inner.data_url()
    }
}

impl JsExportResult {
    pub(crate) fn from_result(inner: ExportResult) -> Self {
        Self { inner }
    }
}

/// Convert a u8 filter value to the core FilterType enum.
///
/// Values:
/// - 0 = Nearest (fastest, lowest quality)
/// - 1 = Bilinear (matches canvas drawing, default)
/// - 2 = Lanczos3 (best quality, slowest)
///
/// Any other value defaults to Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Nearest,
        2 => FilterType::Lanczos3,
        _ => FilterType::Bilinear,
    }
}

/// Build an export request from the string options used by the UI.
pub(crate) fn export_request(
    format: &str,
    paper_size: &str,
    base_name: &str,
    filter: u8,
) -> Result<ExportRequest, UnknownOption> {
    let format: ExportFormat = format.parse()?;
    let paper_size: PaperSize = paper_size.parse()?;
    Ok(ExportRequest::new(format, paper_size, base_name).with_filter(filter_from_u8(filter)))
}
