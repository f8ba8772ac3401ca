//! Export pipeline: scale a source image for print and encode it for download.
//!
//! # Pipeline
//!
//! 1. Pick the surface width from the paper size (or keep the source width)
//! 2. Derive the surface height from the source aspect ratio
//! 3. Allocate the drawing surface
//! 4. Draw the source scaled to fill it, over white for JPEG
//! 5. Encode (JPEG at quality 95, lossless PNG)
//! 6. Derive the download filename from the base name
//!
//! # Examples
//!
//! ```ignore
//! use desenho_core::decode::SourceImage;
//! use desenho_core::export::{export, ExportFormat, ExportRequest, PaperSize};
//!
//! let source = SourceImage::from_data_url(&image_url)?;
//! let request = ExportRequest::new(ExportFormat::Jpeg, PaperSize::A4, "Davi e Golias");
//! let result = export(&source, &request)?;
//! assert_eq!(result.filename, "desenho_biblico_daviegolias.jpeg");
//! ```

mod filename;
mod paper;
mod surface;

pub use filename::{sanitize, suggested_filename, FALLBACK_NAME, FILENAME_PREFIX, MAX_NAME_LEN};
pub use paper::{ExportFormat, PaperSize, UnknownOption};
pub use surface::{draw_opaque, draw_transparent, RenderError, Surface, MAX_SURFACE_PIXELS};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::{encode_data_url, DecodeError, FilterType, SourceImage};
use crate::encode::{encode_jpeg, encode_png, JPEG_EXPORT_QUALITY};

/// Errors that stop an export. No partial output is ever produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    /// The source image could not be read.
    #[error("Could not read source image: {0}")]
    Decode(#[from] DecodeError),

    /// The drawing surface could not be created, drawn or encoded.
    #[error("Could not render export: {0}")]
    Render(#[from] RenderError),
}

/// What the caller wants downloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub paper_size: PaperSize,
    /// Text the filename is derived from, usually the prompt.
    pub base_name: String,
    #[serde(default)]
    pub filter: FilterType,
}

impl ExportRequest {
    pub fn new(format: ExportFormat, paper_size: PaperSize, base_name: impl Into<String>) -> Self {
        Self {
            format,
            paper_size,
            base_name: base_name.into(),
            filter: FilterType::default(),
        }
    }

    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }
}

/// An encoded download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub format: ExportFormat,
    pub width: u32,
    pub height: u32,
}

impl ExportResult {
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// The encoded bytes as a `data:` URL.
    pub fn data_url(&self) -> String {
        encode_data_url(self.mime_type(), &self.bytes)
    }
}

/// Run the export pipeline on an already decoded source.
///
/// # Errors
///
/// Returns `ExportError::Render` if the surface can't be allocated or encoded.
pub fn export(source: &SourceImage, request: &ExportRequest) -> Result<ExportResult, ExportError> {
    let (width, height) = request
        .paper_size
        .target_dimensions(source.width(), source.height());

    log::debug!(
        "exporting {}x{} source as {} {} at {}x{}",
        source.width(),
        source.height(),
        request.paper_size,
        request.format,
        width,
        height
    );

    let surface = if request.format.has_alpha() {
        draw_transparent(source, width, height, request.filter)?
    } else {
        draw_opaque(source, width, height, request.filter)?
    };
    debug_assert_eq!(surface.dimensions(), (width, height));

    let bytes = match &surface {
        Surface::Opaque(img) => encode_jpeg(img.as_raw(), width, height, JPEG_EXPORT_QUALITY)
            .map_err(RenderError::from)?,
        Surface::Transparent(img) => {
            encode_png(img.as_raw(), width, height).map_err(RenderError::from)?
        }
    };

    let filename = suggested_filename(&request.base_name, request.format);
    log::debug!("encoded {} ({} bytes)", filename, bytes.len());

    Ok(ExportResult {
        bytes,
        filename,
        format: request.format,
        width,
        height,
    })
}

/// Decode `bytes` and run the export pipeline on the result.
///
/// # Errors
///
/// Returns `ExportError::Decode` if the bytes are not a readable image, before
/// any surface is allocated.
pub fn export_bytes(bytes: &[u8], request: &ExportRequest) -> Result<ExportResult, ExportError> {
    let source = SourceImage::decode(bytes).inspect_err(|e| log::warn!("export decode failed: {e}"))?;
    export(&source, request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_png;

    fn gradient(width: u32, height: u32, alpha: u8) -> SourceImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8);
                pixels.push(((y * 255) / height.max(1)) as u8);
                pixels.push(128);
                pixels.push(alpha);
            }
        }
        SourceImage::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_original_png_keeps_dimensions_and_pixels() {
        let src = gradient(30, 40, 200);
        let request = ExportRequest::new(ExportFormat::Png, PaperSize::Original, "Davi e Golias");
        let result = export(&src, &request).unwrap();

        assert_eq!((result.width, result.height), (30, 40));
        assert_eq!(result.filename, "desenho_biblico_daviegolias.png");
        assert_eq!(result.mime_type(), "image/png");

        let decoded = image::load_from_memory(&result.bytes).unwrap().into_rgba8();
        assert_eq!(decoded.as_raw().as_slice(), src.pixels());
    }

    #[test]
    fn test_a4_dimensions() {
        let src = gradient(1000, 1333, 255);
        let request = ExportRequest::new(ExportFormat::Jpeg, PaperSize::A4, "arca");
        let result = export(&src, &request).unwrap();

        assert_eq!(result.width, 2480);
        assert_eq!(result.height, 3306);
        assert_eq!(&result.bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_a5_png() {
        let src = gradient(30, 40, 255);
        let request = ExportRequest::new(ExportFormat::Png, PaperSize::A5, "");
        let result = export(&src, &request).unwrap();

        assert_eq!((result.width, result.height), (1748, 2331));
        assert_eq!(result.filename, "desenho_biblico_arte.png");
    }

    #[test]
    fn test_jpeg_transparent_becomes_white() {
        let src = SourceImage::new(16, 16, vec![0u8; 16 * 16 * 4]).unwrap();
        let request = ExportRequest::new(ExportFormat::Jpeg, PaperSize::Original, "???");
        let result = export(&src, &request).unwrap();

        assert_eq!(result.filename, "desenho_biblico_arte.jpeg");
        assert_eq!(&result.bytes[0..2], &[0xFF, 0xD8]);

        let decoded = image::load_from_memory(&result.bytes).unwrap().into_rgb8();
        assert!(decoded.pixels().all(|p| p.0.iter().all(|&c| c >= 250)));
    }

    #[test]
    fn test_png_keeps_transparency() {
        let src = SourceImage::new(8, 8, vec![0u8; 8 * 8 * 4]).unwrap();
        let request = ExportRequest::new(ExportFormat::Png, PaperSize::Original, "x");
        let result = export(&src, &request).unwrap();

        let decoded = image::load_from_memory(&result.bytes).unwrap().into_rgba8();
        assert!(decoded.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_export_bytes_decodes_first() {
        let src = gradient(12, 16, 255);
        let png = encode_png(src.pixels(), 12, 16).unwrap();
        let request = ExportRequest::new(ExportFormat::Jpeg, PaperSize::Original, "Salmo 23");
        let result = export_bytes(&png, &request).unwrap();

        assert_eq!((result.width, result.height), (12, 16));
        assert_eq!(result.filename, "desenho_biblico_salmo23.jpeg");
    }

    #[test]
    fn test_export_bytes_rejects_garbage() {
        let request = ExportRequest::new(ExportFormat::Png, PaperSize::A4, "x");
        let result = export_bytes(b"not an image", &request);
        assert_eq!(result, Err(ExportError::Decode(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_oversized_surface_is_render_error() {
        // 1 px wide, so A4 would need a surface roughly 20 million pixels tall
        let src = SourceImage::new(1, 8064, vec![255u8; 8064 * 4]).unwrap();
        let request = ExportRequest::new(ExportFormat::Png, PaperSize::A4, "x");
        let result = export(&src, &request);
        assert!(matches!(
            result,
            Err(ExportError::Render(RenderError::SurfaceTooLarge { .. }))
        ));
    }

    #[test]
    fn test_data_url() {
        let src = gradient(2, 2, 255);
        let request = ExportRequest::new(ExportFormat::Png, PaperSize::Original, "x");
        let result = export(&src, &request).unwrap();
        assert!(result.data_url().starts_with("data:image/png;base64,iVBORw0KGgo"));
    }

    #[test]
    fn test_request_deserializes_with_default_filter() {
        let request: ExportRequest = serde_json::from_str(
            r#"{"format":"jpeg","paper_size":"a5","base_name":"Jonas"}"#,
        )
        .unwrap();
        assert_eq!(request.format, ExportFormat::Jpeg);
        assert_eq!(request.paper_size, PaperSize::A5);
        assert_eq!(request.filter, FilterType::Bilinear);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn paper_strategy() -> impl Strategy<Value = PaperSize> {
        prop_oneof![Just(PaperSize::A4), Just(PaperSize::A5)]
    }

    proptest! {
        /// Property: paper sizes keep the source aspect ratio within a pixel.
        #[test]
        fn prop_paper_keeps_aspect_ratio(
            width in 1u32..=8000,
            height in 1u32..=8000,
            paper in paper_strategy(),
        ) {
            let (w, h) = paper.target_dimensions(width, height);
            prop_assume!(h > 1);

            let expected_h = w as f64 * height as f64 / width as f64;
            prop_assert!((h as f64 - expected_h).abs() <= 1.0,
                "{}x{} -> {}x{}", width, height, w, h);
        }

        /// Property: original size never changes the dimensions.
        #[test]
        fn prop_original_is_identity(width in 1u32..=8000, height in 1u32..=8000) {
            prop_assert_eq!(PaperSize::Original.target_dimensions(width, height), (width, height));
        }

        /// Property: any transparent source exports to an all-white JPEG.
        #[test]
        fn prop_jpeg_transparent_pixels_are_white(
            width in 1u32..=24,
            height in 1u32..=24,
            r in any::<u8>(), g in any::<u8>(), b in any::<u8>(),
        ) {
            let pixels = [r, g, b, 0].repeat((width * height) as usize);
            let src = SourceImage::new(width, height, pixels).unwrap();
            let request = ExportRequest::new(ExportFormat::Jpeg, PaperSize::Original, "x");
            let result = export(&src, &request).unwrap();

            let decoded = image::load_from_memory(&result.bytes).unwrap().into_rgb8();
            prop_assert!(decoded.pixels().all(|p| p.0.iter().all(|&c| c >= 250)));
        }
    }
}
