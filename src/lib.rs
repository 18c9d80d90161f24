//! woundscan - browser client for wound image analysis.
//!
//! The user picks a wound photo, the client posts it to an analysis service
//! and renders the returned analysis, bandage suggestion, Wagner grade and
//! necrosis stage. The controller logic is platform neutral; the `wasm32`
//! build binds it to the page's DOM and `fetch`.

pub mod api;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod file;
pub mod scale;
pub mod view;

pub use api::{AnalysisReport, AnalysisResponse, AnalysisService, interpret_response};
pub use config::{ClientConfig, ConfigError, LogLevel};
pub use controller::UploadController;
pub use error::AnalysisError;
pub use file::ImageFile;
pub use scale::{NecrosisScale, ScaleSegment, ScaleUpdate};
pub use view::{ResultField, UploadView};

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::*;
