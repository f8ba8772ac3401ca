//! Print window binding.

use desenho_core::print::print_document;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Open a new window that prints `image_url` on A4 and then closes.
///
/// Returns `false` when the browser blocked the popup.
#[wasm_bindgen]
pub fn print_image(image_url: &str) -> Result<bool, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let Some(print_window) = window.open_with_url_and_target("", "_blank")? else {
        log::warn!("print window was blocked");
        return Ok(false);
    };

    let document = print_window
        .document()
        .ok_or_else(|| JsValue::from_str("print window has no document"))?
        .dyn_into::<web_sys::HtmlDocument>()?;
    document.write_1(&print_document(image_url))?;
    document.close()?;
    Ok(true)
}
