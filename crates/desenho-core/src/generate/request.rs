//! Request and response bodies for the image model's `:predict` endpoint.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::{validate_prompt, DrawingStyle, GenerationError};

/// One image per request.
pub const SAMPLE_COUNT: u32 = 1;
/// The model is always asked for PNG.
pub const OUTPUT_MIME_TYPE: &str = "image/png";
/// Portrait 3:4, close to A-series paper.
pub const ASPECT_RATIO: &str = "3:4";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Instance {
    prompt: String,
}

/// Fixed generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParameters {
    pub sample_count: u32,
    pub output_mime_type: String,
    pub aspect_ratio: String,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            sample_count: SAMPLE_COUNT,
            output_mime_type: OUTPUT_MIME_TYPE.to_string(),
            aspect_ratio: ASPECT_RATIO.to_string(),
        }
    }
}

/// A validated, fully templated generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    instances: Vec<Instance>,
    parameters: GenerationParameters,
}

impl GenerationRequest {
    /// Build a request for `user_prompt` drawn in `style`.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::EmptyPrompt` for a blank prompt.
    pub fn new(user_prompt: &str, style: DrawingStyle) -> Result<Self, GenerationError> {
        let user_prompt = validate_prompt(user_prompt)?;
        Ok(Self {
            instances: vec![Instance {
                prompt: style.prompt(user_prompt),
            }],
            parameters: GenerationParameters::default(),
        })
    }

    /// The templated prompt text.
    pub fn prompt(&self) -> &str {
        self.instances
            .first()
            .map(|i| i.prompt.as_str())
            .unwrap_or_default()
    }

    pub fn parameters(&self) -> &GenerationParameters {
        &self.parameters
    }

    /// Serialize to the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::InvalidRequest` if the body can't be serialized.
    pub fn to_json(&self) -> Result<String, GenerationError> {
        serde_json::to_string(self).map_err(|e| GenerationError::InvalidRequest(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    #[serde(default)]
    bytes_base64_encoded: Option<String>,
    #[serde(default)]
    mime_type: Option<String>,
}

/// A generated image as returned by the service, still base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub base64: String,
}

impl GeneratedImage {
    /// `data:` URL suitable for an `<img src>` and for later export.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }

    /// Build from raw bytes, mostly useful for stubbing the service.
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.to_string(),
            base64: STANDARD.encode(bytes),
        }
    }
}

/// Read the first image out of a `:predict` response body.
///
/// # Errors
///
/// Returns `GenerationError::InvalidResponse` for malformed JSON and
/// `GenerationError::NoImages` when no prediction carries image bytes.
pub fn parse_response(body: &str) -> Result<GeneratedImage, GenerationError> {
    let response: PredictResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

    response
        .predictions
        .into_iter()
        .find_map(|p| {
            let base64 = p.bytes_base64_encoded.filter(|b| !b.is_empty())?;
            Some(GeneratedImage {
                mime_type: p.mime_type.unwrap_or_else(|| OUTPUT_MIME_TYPE.to_string()),
                base64,
            })
        })
        .ok_or(GenerationError::NoImages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let request = GenerationRequest::new("Davi e Golias", DrawingStyle::Cute).unwrap();
        let body: serde_json::Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();

        assert_eq!(
            body["parameters"],
            json!({"sampleCount": 1, "outputMimeType": "image/png", "aspectRatio": "3:4"})
        );
        let prompt = body["instances"][0]["prompt"].as_str().unwrap();
        assert_eq!(prompt, DrawingStyle::Cute.prompt("Davi e Golias"));
    }

    #[test]
    fn test_request_trims_prompt() {
        let request = GenerationRequest::new("  Jonas  ", DrawingStyle::Coloring).unwrap();
        assert!(request.prompt().contains("\"Jonas\""));
    }

    #[test]
    fn test_request_rejects_blank_prompt() {
        assert_eq!(
            GenerationRequest::new("   ", DrawingStyle::Coloring),
            Err(GenerationError::EmptyPrompt)
        );
    }

    #[test]
    fn test_parse_response() {
        let body = r#"{"predictions":[{"bytesBase64Encoded":"iVBORw0KGgo=","mimeType":"image/png"}]}"#;
        let image = parse_response(body).unwrap();
        assert_eq!(image.base64, "iVBORw0KGgo=");
        assert_eq!(image.data_url(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_parse_response_defaults_mime() {
        let image = parse_response(r#"{"predictions":[{"bytesBase64Encoded":"AQID"}]}"#).unwrap();
        assert_eq!(image.mime_type, "image/png");
    }

    #[test]
    fn test_parse_response_skips_filtered_predictions() {
        let body = r#"{"predictions":[{"raiFilteredReason":"x"},{"bytesBase64Encoded":"AQID"}]}"#;
        assert_eq!(parse_response(body).unwrap().base64, "AQID");
    }

    #[test]
    fn test_parse_response_no_images() {
        assert_eq!(parse_response("{}"), Err(GenerationError::NoImages));
        assert_eq!(
            parse_response(r#"{"predictions":[]}"#),
            Err(GenerationError::NoImages)
        );
    }

    #[test]
    fn test_parse_response_bad_json() {
        assert!(matches!(
            parse_response("<html>"),
            Err(GenerationError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_generated_image_from_bytes() {
        let image = GeneratedImage::from_bytes("image/png", &[1, 2, 3]);
        assert_eq!(image.data_url(), "data:image/png;base64,AQID");
    }
}
