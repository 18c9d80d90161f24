//! Fetch-based [`AnalysisService`].

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response, Window};

use crate::api::{AnalysisResponse, AnalysisService, interpret_response};
use crate::config::ClientConfig;
use crate::error::AnalysisError;

/// POSTs the image as multipart form data with `window.fetch`.
pub struct FetchService {
    window: Window,
    endpoint: String,
    field_name: String,
}

impl FetchService {
    pub fn new(window: Window, config: &ClientConfig) -> Self {
        Self {
            window,
            endpoint: config.endpoint.clone(),
            field_name: config.field_name.clone(),
        }
    }

    fn build_request(&self, file: &File) -> Result<Request, JsValue> {
        let form = FormData::new()?;
        form.append_with_blob_and_filename(&self.field_name, file, &file.name())?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&form);
        Request::new_with_str_and_init(&self.endpoint, &init)
    }
}

fn network(error: JsValue) -> AnalysisError {
    AnalysisError::network(woundscan_dom::js_message(&error))
}

impl AnalysisService for FetchService {
    type File = File;

    async fn analyze(&self, file: &File) -> Result<AnalysisResponse, AnalysisError> {
        let request = self.build_request(file).map_err(network)?;
        log::debug!("POST {} ({} bytes)", self.endpoint, file.size());

        let response: Response = JsFuture::from(self.window.fetch_with_request(&request))
            .await
            .map_err(network)?
            .dyn_into()
            .map_err(|_| AnalysisError::network("fetch did not return a Response"))?;

        let body = JsFuture::from(response.text().map_err(network)?)
            .await
            .map_err(network)?
            .as_string()
            .unwrap_or_default();

        log::debug!("{} answered {} {}", self.endpoint, response.status(), response.status_text());
        interpret_response(response.status(), &response.status_text(), &body)
    }
}
