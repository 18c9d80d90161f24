//! woundscan_dom - typed DOM helpers for the woundscan browser client.
//!
//! Wraps the handful of `web-sys` APIs the upload form needs: element lookup
//! with typed casts, show/hide, CSS class toggles, event bindings and an
//! awaitable `FileReader`. Everything touching the browser is compiled for
//! `wasm32` only; the error type, display values and logging setup are
//! available on every target.

pub mod display;
pub mod error;
pub mod logging;

#[cfg(target_arch = "wasm32")]
mod file_read;
#[cfg(target_arch = "wasm32")]
mod listener;
#[cfg(target_arch = "wasm32")]
mod lookup;

pub use display::{ACTIVE_CLASS, Display};
pub use error::{DomError, Result};

#[cfg(target_arch = "wasm32")]
pub use display::{set_active, set_shown};
#[cfg(target_arch = "wasm32")]
pub use error::js_message;
#[cfg(target_arch = "wasm32")]
pub use file_read::read_as_data_url;
#[cfg(target_arch = "wasm32")]
pub use listener::listen;
#[cfg(target_arch = "wasm32")]
pub use lookup::Dom;
