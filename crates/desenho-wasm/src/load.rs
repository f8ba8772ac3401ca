//! Loading the source image for an export.
//!
//! `data:` URLs are decoded in place; any other URL is fetched. The image is
//! loaded again on every export, nothing is cached.

use desenho_core::decode::{DecodeError, SourceImage};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Errors that can occur while loading a source image.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The bytes arrived but are not a readable image.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The server answered with a non-success status.
    #[error("HTTP {0} while fetching image")]
    Status(u16),

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for LoadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Whether `url` can be decoded without a network round trip.
pub(crate) fn is_data_url(url: &str) -> bool {
    url.trim_start().starts_with("data:")
}

/// Load and decode the image at `url`.
pub async fn load_source(url: &str) -> Result<SourceImage, LoadError> {
    if is_data_url(url) {
        return Ok(SourceImage::from_data_url(url.trim())?);
    }

    let window = web_sys::window().ok_or_else(|| LoadError::JsError("no global window".into()))?;
    let response: web_sys::Response = JsFuture::from(window.fetch_with_str(url))
        .await?
        .dyn_into()
        .map_err(|e| LoadError::JsError(format!("fetch did not return a Response: {e:?}")))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let buffer = JsFuture::from(response.array_buffer()?).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(SourceImage::decode(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_data_url() {
        assert!(is_data_url("data:image/png;base64,AA=="));
        assert!(is_data_url("  data:image/png;base64,AA=="));
        assert!(!is_data_url("https://example.com/a.png"));
        assert!(!is_data_url("blob:https://example.com/uuid"));
    }

    #[test]
    fn test_load_error_display() {
        assert_eq!(LoadError::Status(404).to_string(), "HTTP 404 while fetching image");
        assert_eq!(
            LoadError::from(DecodeError::InvalidFormat).to_string(),
            "Invalid or unsupported image format"
        );
    }
}
