//! Browser entry point.
//!
//! Wires the upload controller to the page: reads the optional inline
//! configuration, installs logging, looks up the form elements and binds the
//! picker and button events to controller methods.

mod fetch;
mod file;
mod view;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlInputElement};
use woundscan_dom::{Dom, DomError, listen};

use crate::config::ClientConfig;
use crate::constants::ids;
use crate::controller::UploadController;

pub use fetch::FetchService;
pub use view::WebView;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let dom = Dom::current().map_err(|e| JsValue::from_str(&e.to_string()))?;

    let config = read_config(&dom);
    let level = config
        .as_ref()
        .map(|c| c.log_level)
        .unwrap_or_default()
        .to_level_filter();
    woundscan_dom::logging::init(level);

    let config = config.unwrap_or_else(|e| {
        log::error!("{}; using defaults", e);
        ClientConfig::default()
    });

    mount(&dom, &config).map_err(|e| {
        log::error!("woundscan failed to start: {}", e);
        JsValue::from_str(&e.to_string())
    })
}

fn read_config(dom: &Dom) -> Result<ClientConfig, crate::config::ConfigError> {
    let text = dom
        .optional_element(ids::CONFIG_SCRIPT)
        .and_then(|element| element.text_content())
        .unwrap_or_default();
    ClientConfig::from_json(&text)
}

fn mount(dom: &Dom, config: &ClientConfig) -> Result<(), DomError> {
    let input: HtmlInputElement = dom.element(ids::FILE_INPUT)?;
    let button: HtmlElement = dom.element(ids::SUBMIT_BUTTON)?;

    let view = WebView::from_document(dom)?;
    let service = FetchService::new(dom.window().clone(), config);
    let controller = Rc::new(UploadController::new(view, service));

    let on_change = controller.clone();
    let picker = input.clone();
    listen(&input, "change", move |_event| {
        let file = picker.files().and_then(|files| files.get(0));
        let controller = on_change.clone();
        spawn_local(async move {
            controller.handle_file_selected(file).await;
        });
    })?;

    let on_click = controller.clone();
    listen(&button, "click", move |_event| {
        let controller = on_click.clone();
        spawn_local(async move {
            controller.submit_for_analysis().await;
        });
    })?;

    log::info!(
        "woundscan ready: {} scale segments, posting '{}' to {}",
        controller.scale().len(),
        config.field_name,
        config.endpoint
    );
    Ok(())
}
