//! Share link bindings.

use desenho_core::share::ShareLinks;
use wasm_bindgen::prelude::*;

/// Share links for `prompt` pointing at `page_url`, as `{ twitter, facebook, whatsapp }`.
#[wasm_bindgen]
pub fn share_links_for(prompt: &str, page_url: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&ShareLinks::new(prompt, page_url))?)
}

/// Share links for `prompt` pointing at the current page.
#[wasm_bindgen]
pub fn share_links(prompt: &str) -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let page_url = window.location().href()?;
    share_links_for(prompt, &page_url)
}
