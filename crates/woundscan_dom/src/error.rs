use thiserror::Error;

/// Errors raised while wiring the page or talking to browser APIs.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("No browser window available")]
    NoWindow,

    #[error("No document attached to the window")]
    NoDocument,

    #[error("Element #{id} not found")]
    MissingElement { id: String },

    #[error("Element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl DomError {
    /// Create a missing element error.
    pub fn missing_element(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }
}

pub type Result<T> = std::result::Result<T, DomError>;

/// Best-effort human readable text for a thrown JS value.
///
/// `Error` objects yield their `message`, strings are used as-is and anything
/// else falls back to its debug form.
#[cfg(target_arch = "wasm32")]
pub fn js_message(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DomError::Js(js_message(&value))
    }
}
