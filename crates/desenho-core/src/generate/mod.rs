//! Image generation: prompt validation and the service wire format.
//!
//! The HTTP exchange itself lives in the WASM bindings; this module only
//! builds request bodies and reads response bodies, so it is fully testable
//! off the browser.

mod request;
mod style;

pub use request::{
    parse_response, GeneratedImage, GenerationParameters, GenerationRequest, ASPECT_RATIO,
    OUTPUT_MIME_TYPE, SAMPLE_COUNT,
};
pub use style::DrawingStyle;

use thiserror::Error;

/// Errors from validating, sending or reading a generation request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// The prompt is empty or whitespace only.
    #[error("Prompt is empty")]
    EmptyPrompt,

    /// The request body could not be built.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The request never got a response.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success HTTP status.
    #[error("Service returned HTTP {0}")]
    Status(u16),

    /// The response carried no image.
    #[error("No image was generated")]
    NoImages,

    /// The response body could not be parsed.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GenerationError {
    /// Whether this is a local validation failure rather than a service one.
    pub fn is_validation(&self) -> bool {
        matches!(self, GenerationError::EmptyPrompt)
    }
}

/// Trim the prompt and reject it if nothing is left.
pub fn validate_prompt(prompt: &str) -> Result<&str, GenerationError> {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return Err(GenerationError::EmptyPrompt);
    }
    Ok(trimmed)
}
