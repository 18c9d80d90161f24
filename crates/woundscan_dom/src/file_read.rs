//! Awaitable `FileReader` reads.

use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, File, FileReader};

use crate::{DomError, Result};

/// Read a file into a `data:` URL suitable for an `<img src>`.
pub async fn read_as_data_url(file: &File) -> Result<String> {
    let reader = FileReader::new()?;

    let mut setup_error = None;
    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let loaded = reader.clone();
        let onload = Closure::once_into_js(move |_event: Event| {
            let result = loaded.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let onerror = Closure::once_into_js(move |event: Event| {
            let _ = reject.call1(&JsValue::NULL, &event);
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));

        if let Err(e) = reader.read_as_data_url(file) {
            setup_error = Some(e);
        }
    });

    if let Some(e) = setup_error {
        return Err(e.into());
    }

    let name = file.name();
    let value = JsFuture::from(promise)
        .await
        .map_err(|_| DomError::Js(format!("could not read file '{}'", name)))?;

    value
        .as_string()
        .ok_or_else(|| DomError::Js(format!("file '{}' did not produce a data URL", name)))
}
