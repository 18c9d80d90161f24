//! DOM-backed [`UploadView`].

use web_sys::{Element, HtmlButtonElement, HtmlElement, HtmlImageElement};
use woundscan_dom::{Dom, set_active, set_shown};

use crate::constants::ids;
use crate::scale::ScaleSegment;
use crate::view::{ResultField, UploadView};

/// Typed handles on every element the controller touches.
pub struct WebView {
    dom: Dom,
    file_name: HtmlElement,
    submit: HtmlButtonElement,
    preview: HtmlImageElement,
    placeholder: HtmlElement,
    loading: HtmlElement,
    results: HtmlElement,
    analysis: HtmlElement,
    suggestion: HtmlElement,
    wagner_grade: HtmlElement,
    necrosis: HtmlElement,
    segments: Vec<Element>,
}

impl WebView {
    /// Look up the form's elements. Fails if any required element is missing.
    pub fn from_document(dom: &Dom) -> woundscan_dom::Result<Self> {
        Ok(Self {
            dom: dom.clone(),
            file_name: dom.element(ids::FILE_NAME)?,
            submit: dom.element(ids::SUBMIT_BUTTON)?,
            preview: dom.element(ids::IMAGE_PREVIEW)?,
            placeholder: dom.element(ids::PREVIEW_PLACEHOLDER)?,
            loading: dom.element(ids::LOADING_INDICATOR)?,
            results: dom.element(ids::RESULTS_SECTION)?,
            analysis: dom.element(ids::ANALYSIS_TEXT)?,
            suggestion: dom.element(ids::SUGGESTION_TEXT)?,
            wagner_grade: dom.element(ids::WAGNER_GRADE_TEXT)?,
            necrosis: dom.element(ids::NECROSIS_TEXT)?,
            segments: dom.query_all(ids::SCALE_SEGMENT_SELECTOR)?,
        })
    }

    fn text_target(&self, field: ResultField) -> &HtmlElement {
        match field {
            ResultField::Analysis => &self.analysis,
            ResultField::Suggestion => &self.suggestion,
            ResultField::WagnerGrade => &self.wagner_grade,
            ResultField::NecrosisStatus => &self.necrosis,
        }
    }
}

fn report(what: &str, result: woundscan_dom::Result<()>) {
    if let Err(e) = result {
        log::warn!("Could not {}: {}", what, e);
    }
}

impl UploadView for WebView {
    fn scale_segments(&self) -> Vec<ScaleSegment> {
        self.segments
            .iter()
            .map(|element| ScaleSegment {
                stage: element.get_attribute(ids::STAGE_ATTRIBUTE).unwrap_or_default(),
                label: element.get_attribute(ids::LABEL_ATTRIBUTE),
            })
            .collect()
    }

    fn set_file_name(&self, name: &str) {
        self.file_name.set_text_content(Some(name));
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.submit.set_disabled(!enabled);
    }

    fn show_preview(&self, source: &str) {
        self.preview.set_src(source);
        report("show preview", set_shown(&self.preview, true));
        report("hide placeholder", set_shown(&self.placeholder, false));
    }

    fn hide_preview(&self) {
        report("hide preview", set_shown(&self.preview, false));
        report("show placeholder", set_shown(&self.placeholder, true));
    }

    fn set_loading(&self, visible: bool) {
        report("toggle loading indicator", set_shown(&self.loading, visible));
    }

    fn set_results_visible(&self, visible: bool) {
        report("toggle results", set_shown(&self.results, visible));
    }

    fn set_result_text(&self, field: ResultField, text: &str) {
        self.text_target(field).set_text_content(Some(text));
    }

    fn set_segment_active(&self, index: usize, active: bool) {
        if let Some(segment) = self.segments.get(index) {
            report("toggle scale segment", set_active(segment, active));
        }
    }

    fn alert(&self, message: &str) {
        self.dom.alert(message);
    }
}
