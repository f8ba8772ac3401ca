//! `data:` URL packing and unpacking.
//!
//! The generation service answers with base64 image bytes, which the UI keeps
//! as a `data:image/png;base64,...` URL. Exports decode from that same URL.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::DecodeError;

/// The contents of a base64 `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    /// Media type, e.g. `image/png`. Empty when the URL omitted it.
    pub mime_type: String,
    /// Decoded payload.
    pub bytes: Vec<u8>,
}

/// Parse a `data:<mime>;base64,<payload>` URL.
///
/// Only base64 payloads are accepted; percent-encoded text payloads never
/// carry images in this application.
///
/// # Errors
///
/// Returns `DecodeError::MalformedDataUrl` if the scheme, the `;base64`
/// marker, or the comma separator is missing, and `DecodeError::Base64` if
/// the payload does not decode.
pub fn decode_data_url(url: &str) -> Result<DataUrl, DecodeError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or(DecodeError::MalformedDataUrl)?;
    let (header, payload) = rest.split_once(',').ok_or(DecodeError::MalformedDataUrl)?;
    let mime_type = header
        .strip_suffix(";base64")
        .ok_or(DecodeError::MalformedDataUrl)?;

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| DecodeError::Base64(e.to_string()))?;

    Ok(DataUrl {
        mime_type: mime_type.to_string(),
        bytes,
    })
}

/// Build a base64 `data:` URL for the given bytes.
pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_data_url_basic() {
        let data = decode_data_url("data:image/png;base64,AQID").unwrap();
        assert_eq!(data.mime_type, "image/png");
        assert_eq!(data.bytes, vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_data_url_without_mime() {
        let data = decode_data_url("data:;base64,AQID").unwrap();
        assert_eq!(data.mime_type, "");
        assert_eq!(data.bytes, vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_data_url_rejects_other_schemes() {
        assert_eq!(
            decode_data_url("https://example.com/a.png"),
            Err(DecodeError::MalformedDataUrl)
        );
    }

    #[test]
    fn test_decode_data_url_requires_base64_marker() {
        assert_eq!(
            decode_data_url("data:text/plain,hello"),
            Err(DecodeError::MalformedDataUrl)
        );
    }

    #[test]
    fn test_decode_data_url_requires_comma() {
        assert_eq!(
            decode_data_url("data:image/png;base64"),
            Err(DecodeError::MalformedDataUrl)
        );
    }

    #[test]
    fn test_decode_data_url_bad_payload() {
        let result = decode_data_url("data:image/png;base64,@@@@");
        assert!(matches!(result, Err(DecodeError::Base64(_))));
    }

    #[test]
    fn test_encode_data_url() {
        assert_eq!(
            encode_data_url("image/jpeg", &[1, 2, 3]),
            "data:image/jpeg;base64,AQID"
        );
    }

    #[test]
    fn test_encode_then_decode_preserves_mime() {
        let url = encode_data_url("image/png", b"\x89PNG");
        let data = decode_data_url(&url).unwrap();
        assert_eq!(data.mime_type, "image/png");
        assert_eq!(data.bytes, b"\x89PNG".to_vec());
    }
}
