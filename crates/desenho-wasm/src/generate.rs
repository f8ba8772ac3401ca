//! Image generation client.
//!
//! Sends the templated prompt to the image model with `fetch` and resolves
//! with a `data:` URL of the generated PNG.
//!
//! # Example
//!
//! ```typescript
//! import { Generator } from '@desenho/wasm';
//!
//! const generator = new Generator({ api_key: import.meta.env.VITE_API_KEY });
//! const imageUrl = await generator.generate('Davi e Golias', 'cute');
//! ```

use desenho_core::config::{Config, API_KEY_HEADER};
use desenho_core::generate::{
    parse_response, DrawingStyle, GeneratedImage, GenerationError, GenerationRequest,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{Request, RequestInit, Response};

fn transport(e: JsValue) -> GenerationError {
    GenerationError::Transport(format!("{e:?}"))
}

/// POST `request` to the configured model and read back the image.
async fn send(config: &Config, request: &GenerationRequest) -> Result<GeneratedImage, GenerationError> {
    let body = request.to_json()?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let http_request = Request::new_with_str_and_init(&config.predict_url(), &opts).map_err(transport)?;
    let headers = http_request.headers();
    headers.set("Content-Type", "application/json").map_err(transport)?;
    headers.set(API_KEY_HEADER, config.api_key()).map_err(transport)?;

    let window = web_sys::window()
        .ok_or_else(|| GenerationError::Transport("no global window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&http_request))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(transport)?;

    if !response.ok() {
        return Err(GenerationError::Status(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(transport)?
        .as_string()
        .ok_or_else(|| GenerationError::InvalidResponse("body is not text".to_string()))?;

    parse_response(&text)
}

/// Client for the image generation service.
#[wasm_bindgen]
pub struct Generator {
    config: Config,
}

#[wasm_bindgen]
impl Generator {
    /// Build a client from `{ api_key, model?, endpoint? }`.
    ///
    /// Throws if the API key is missing so a misconfigured page fails at
    /// startup instead of on the first click.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<Generator, JsValue> {
        let config: Config = serde_wasm_bindgen::from_value(config)?;
        let config = config
            .validated()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("generator ready, model {}", config.model);
        Ok(Generator { config })
    }

    /// Generate an image for `prompt` in the style with id `style`.
    ///
    /// Resolves with a `data:` URL. Rejects with the error message; a blank
    /// prompt rejects without any network request.
    pub fn generate(&self, prompt: String, style: String) -> js_sys::Promise {
        let config = self.config.clone();
        future_to_promise(async move {
            let style = DrawingStyle::from_id(&style);
            let request = GenerationRequest::new(&prompt, style)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;

            match send(&config, &request).await {
                Ok(image) => Ok(JsValue::from_str(&image.data_url())),
                Err(e) => {
                    log::error!("image generation failed: {e}");
                    Err(JsValue::from_str(&e.to_string()))
                }
            }
        })
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn config_value(json: &str) -> JsValue {
        js_sys::JSON::parse(json).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_generator_requires_api_key() {
        assert!(Generator::new(config_value(r#"{"model":"m"}"#)).is_err());
        assert!(Generator::new(config_value(r#"{"api_key":"k"}"#)).is_ok());
    }

    #[wasm_bindgen_test]
    async fn test_blank_prompt_rejects_without_request() {
        let generator = Generator::new(config_value(
            r#"{"api_key":"k","endpoint":"http://127.0.0.1:9"}"#,
        ))
        .unwrap();
        let result = JsFuture::from(generator.generate("   ".to_string(), "cute".to_string())).await;
        assert_eq!(result.unwrap_err().as_string().unwrap(), "Prompt is empty");
    }
}
