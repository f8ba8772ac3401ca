//! Export WASM bindings.
//!
//! This module exposes the export pipeline to JavaScript.
//!
//! # Functions
//!
//! - [`export_image`] - Export an already decoded image
//! - [`export_image_bytes`] - Decode bytes and export them
//! - [`download_image`] - Load an image URL, export it and start a download
//! - [`suggested_filename`] - Filename a download would get
//!
//! # Example
//!
//! ```typescript
//! import { download_image } from '@desenho/wasm';
//!
//! // Loads the generated image again, scales it to A4 and saves it as JPEG
//! await download_image(imageUrl, 'jpeg', 'a4', prompt);
//! ```

use crate::download::trigger_download;
use crate::load::load_source;
use crate::types::{export_request, JsExportResult, JsSourceImage};
use desenho_core::export::{self, ExportFormat};
use wasm_bindgen::prelude::*;

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Export a decoded image.
///
/// # Arguments
///
/// * `image` - Source image
/// * `format` - `"png"` or `"jpeg"` (`"jpg"` accepted)
/// * `paper_size` - `"original"`, `"a4"` or `"a5"`
/// * `base_name` - Text the filename is derived from, usually the prompt
/// * `filter` - 0=Nearest, 1=Bilinear (default), 2=Lanczos3
#[wasm_bindgen]
pub fn export_image(
    image: &JsSourceImage,
    format: &str,
    paper_size: &str,
    base_name: &str,
    filter: u8,
) -> Result<JsExportResult, JsValue> {
    let request = export_request(format, paper_size, base_name, filter).map_err(js_error)?;
    export::export(image.source(), &request)
        .map(JsExportResult::from_result)
        .map_err(js_error)
}

/// Decode PNG/JPEG bytes and export them.
#[wasm_bindgen]
pub fn export_image_bytes(
    bytes: &[u8],
    format: &str,
    paper_size: &str,
    base_name: &str,
    filter: u8,
) -> Result<JsExportResult, JsValue> {
    let request = export_request(format, paper_size, base_name, filter).map_err(js_error)?;
    export::export_bytes(bytes, &request)
        .map(JsExportResult::from_result)
        .map_err(js_error)
}

/// Filename a download of `base_name` in `format` would be saved under.
#[wasm_bindgen]
pub fn suggested_filename(base_name: &str, format: &str) -> Result<String, JsValue> {
    let format: ExportFormat = format.parse().map_err(js_error)?;
    Ok(export::suggested_filename(base_name, format))
}

async fn load_export_and_save(
    image_url: &str,
    format: &str,
    paper_size: &str,
    base_name: &str,
) -> Result<(), JsValue> {
    let request = export_request(format, paper_size, base_name, 1).map_err(js_error)?;
    let source = load_source(image_url).await.map_err(js_error)?;
    let exported = export::export(&source, &request).map_err(js_error)?;
    trigger_download(&exported.bytes, &exported.filename, exported.mime_type()).map_err(js_error)
}

/// Load `image_url`, export it and start a browser download.
///
/// The image is loaded again on every call. Failures are logged to the
/// console and reject the returned promise; no file is saved in that case.
#[wasm_bindgen]
pub async fn download_image(
    image_url: String,
    format: String,
    paper_size: String,
    base_name: String,
) -> Result<(), JsValue> {
    let result = load_export_and_save(&image_url, &format, &paper_size, &base_name).await;
    if let Err(e) = &result {
        log::error!("image download failed: {}", e.as_string().unwrap_or_default());
    }
    result
}


/// WASM-specific tests that require JsValue.
///
/// Run with `wasm-pack test --headless --chrome`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use desenho_core::encode::encode_png;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn png(width: u32, height: u32) -> Vec<u8> {
        encode_png(&vec![255u8; (width * height * 4) as usize], width, height).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_export_image_bytes_a5() {
        let result = export_image_bytes(&png(3, 4), "png", "a5", "Jonas", 1).unwrap();
        assert_eq!(result.width(), 1748);
        assert_eq!(result.height(), 2331);
        assert_eq!(result.filename(), "desenho_biblico_jonas.png");
    }

    #[wasm_bindgen_test]
    fn test_export_image_bytes_rejects_garbage() {
        assert!(export_image_bytes(b"nope", "png", "a4", "x", 1).is_err());
    }

    #[wasm_bindgen_test]
    fn test_export_image_unknown_format() {
        let image = JsSourceImage::new(&png(2, 2)).unwrap();
        assert!(export_image(&image, "gif", "a4", "x", 1).is_err());
    }

    #[wasm_bindgen_test]
    fn test_suggested_filename() {
        assert_eq!(
            suggested_filename("???", "jpg").unwrap(),
            "desenho_biblico_arte.jpeg"
        );
    }

    #[wasm_bindgen_test]
    async fn test_download_image_bad_url_rejects() {
        let result = download_image(
            "data:image/png;base64,@@@".to_string(),
            "png".to_string(),
            "original".to_string(),
            "x".to_string(),
        )
        .await;
        assert!(result.is_err());
    }
}
