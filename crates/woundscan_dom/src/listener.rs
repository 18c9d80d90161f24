//! Event listener bindings.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

/// Attach `handler` to `event_type` events on `target` for the rest of the
/// page's lifetime.
pub fn listen<F>(target: &EventTarget, event_type: &str, handler: F) -> crate::Result<()>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())?;
    callback.forget(); // Leak the closure to keep it alive
    log::debug!("Bound '{}' listener", event_type);
    Ok(())
}
