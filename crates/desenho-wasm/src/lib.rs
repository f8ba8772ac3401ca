//! Desenho WASM - WebAssembly bindings for Desenho
//!
//! This crate provides WASM bindings that expose desenho-core to the browser
//! page, plus the browser-only pieces: fetching, downloading and printing.
//!
//! # Module Structure
//!
//! - `app` - Generator form state
//! - `generate` - Image generation client
//! - `export` - Export pipeline and downloads
//! - `print` - Print window
//! - `share` - Share links
//! - `types` - WASM-compatible wrapper types
//!
//! # Usage
//!
//! ```typescript
//! import init, { App, Generator, download_image } from '@desenho/wasm';
//!
//! await init();
//! const generator = new Generator({ api_key: API_KEY });
//! const app = new App();
//! ```

use wasm_bindgen::prelude::*;

mod app;
mod download;
mod export;
mod generate;
mod load;
mod logger;
mod print;
mod share;
mod types;

pub use app::{App, GenerationJob};
pub use download::{trigger_download, DownloadError};
pub use export::{download_image, export_image, export_image_bytes, suggested_filename};
pub use generate::Generator;
pub use load::{load_source, LoadError};
pub use print::print_image;
pub use share::{share_links, share_links_for};
pub use types::{JsExportResult, JsSourceImage};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logger::init(level);
}

/// Change the console log level (`"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`, `"off"`).
#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    logger::init(logger::parse_level(level));
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
