//! Typed element lookup.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::{DomError, Result};

/// Handle on the page document.
#[derive(Debug, Clone)]
pub struct Dom {
    window: Window,
    document: Document,
}

impl Dom {
    /// Attach to the current window's document.
    pub fn current() -> Result<Self> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Look up `#id` and cast it to the expected element type.
    pub fn element<T: JsCast>(&self, id: &str) -> Result<T> {
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| DomError::missing_element(id))?;

        element
            .dyn_into::<T>()
            .map_err(|_| DomError::WrongElementType {
                id: id.to_string(),
                expected: std::any::type_name::<T>()
                    .rsplit("::")
                    .next()
                    .unwrap_or("element"),
            })
    }

    /// Look up `#id` if it exists, without a type cast.
    pub fn optional_element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    /// All elements matching a CSS selector, in document order.
    pub fn query_all(&self, selector: &str) -> Result<Vec<Element>> {
        let nodes = self.document.query_selector_all(selector)?;
        let mut elements = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                elements.push(element);
            }
        }
        Ok(elements)
    }

    /// Show a blocking `alert()` dialog.
    pub fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::warn!("alert() failed: {}", crate::js_message(&e));
        }
    }
}
