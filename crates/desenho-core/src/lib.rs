//! Desenho Core - biblical illustration generator library
//!
//! This crate provides everything behind the generator form that does not need
//! a browser: the export pipeline that rescales a generated image for A4/A5
//! printing and encodes it for download, the drawing style prompts, the
//! generation service wire format, and the form's state machine.

pub mod config;
pub mod decode;
pub mod encode;
pub mod export;
pub mod generate;
pub mod print;
pub mod share;
pub mod state;

pub use config::{Config, ConfigError};
pub use decode::{DecodeError, SourceImage};
pub use export::{export, export_bytes, ExportError, ExportFormat, ExportRequest, ExportResult, PaperSize};
pub use generate::{DrawingStyle, GenerationError, GenerationRequest};
pub use state::{render, AppState, Effect, Event, View};
