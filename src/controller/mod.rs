//! Upload controller.
//!
//! Owns the selected file and projects selection, request and response state
//! onto an [`UploadView`]. All operations take `&self`: the controller is
//! shared through `Rc` between event bindings, and no `RefCell` borrow is held
//! across an `.await`, so a file can be picked while a request is in flight.

use std::cell::{Cell, RefCell};

use web_time::Instant;

use crate::api::{AnalysisReport, AnalysisService};
use crate::constants::text;
use crate::error::AnalysisError;
use crate::file::{ImageFile, validate_image};
use crate::scale::NecrosisScale;
use crate::view::{ResultField, UploadView};

#[cfg(test)]
mod tests;

/// Mediates between the file input, the analysis request and the results panel.
pub struct UploadController<V, S>
where
    S: AnalysisService,
{
    view: V,
    service: S,
    scale: NecrosisScale,
    /// Current valid selection
    selected: RefCell<Option<S::File>>,
    /// Bumped on every selection so late preview reads can be discarded
    selection_generation: Cell<u64>,
}

impl<V, S> UploadController<V, S>
where
    V: UploadView,
    S: AnalysisService,
{
    /// Create the controller and read the scale catalog from the view.
    pub fn new(view: V, service: S) -> Self {
        let scale = NecrosisScale::new(view.scale_segments());
        log::debug!("Necrosis scale has {} segments", scale.len());

        Self {
            view,
            service,
            scale,
            selected: RefCell::new(None),
            selection_generation: Cell::new(0),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn scale(&self) -> &NecrosisScale {
        &self.scale
    }

    /// Whether a valid file is currently held.
    pub fn has_selection(&self) -> bool {
        self.selected.borrow().is_some()
    }

    /// Handle a change of the file picker. `None` means the picker was cancelled.
    ///
    /// Completes once the preview has been rendered (or discarded).
    pub async fn handle_file_selected(&self, file: Option<S::File>) {
        let generation = self.selection_generation.get().wrapping_add(1);
        self.selection_generation.set(generation);

        let Some(file) = file else {
            log::info!("File selection cleared");
            self.clear_selection(text::NO_FILE_SELECTED);
            return;
        };

        let name = file.name();
        if let Err(e) = validate_image(&file) {
            log::warn!("Rejected '{}': {}", name, e);
            self.view.alert(text::INVALID_FILE_ALERT);
            self.clear_selection(text::INVALID_FILE_TYPE);
            return;
        }

        log::info!("Selected '{}' ({})", name, file.media_type());
        self.view.set_file_name(&name);
        self.view.set_submit_enabled(true);
        *self.selected.borrow_mut() = Some(file.clone());
        self.reset_results();
        self.view.hide_preview();

        let preview = file.read_preview().await;
        if self.selection_generation.get() != generation {
            log::debug!("Discarding stale preview of '{}'", name);
            return;
        }
        match preview {
            Ok(source) => self.view.show_preview(&source),
            Err(e) => {
                log::error!("Could not preview '{}': {}", name, e);
                self.view.hide_preview();
            }
        }
    }

    /// Send the selected file for analysis and display the outcome.
    pub async fn submit_for_analysis(&self) {
        let file = self.selected.borrow().clone();
        let Some(file) = file else {
            log::warn!("Submit requested without a selected image");
            self.view.alert(text::SELECT_IMAGE_FIRST);
            self.finish_submission();
            return;
        };

        self.view.set_loading(true);
        self.view.set_results_visible(false);
        self.view.set_submit_enabled(false);

        let name = file.name();
        log::info!("Submitting '{}' for analysis", name);
        let started = Instant::now();

        match self.service.analyze(&file).await {
            Ok(response) => {
                log::info!("Analysis of '{}' finished in {:?}", name, started.elapsed());
                self.show_report(&AnalysisReport::from(response));
            }
            Err(e) => {
                log::error!("Analysis of '{}' failed after {:?}: {}", name, started.elapsed(), e);
                self.show_failure(&e);
            }
        }

        self.finish_submission();
    }

    /// Highlight the segment for `stage_key` and write the status line.
    pub fn update_necrosis_scale(&self, stage_key: &str) {
        self.clear_scale();

        let update = self.scale.resolve(stage_key);
        log::debug!("Stage '{}' resolved to segment {:?}", stage_key, update.active);
        if let Some(index) = update.active {
            self.view.set_segment_active(index, true);
        }
        self.view
            .set_result_text(ResultField::NecrosisStatus, &update.status_text());
    }

    fn show_report(&self, report: &AnalysisReport) {
        self.view
            .set_result_text(ResultField::Analysis, &report.analysis_text);
        self.view
            .set_result_text(ResultField::Suggestion, &report.bandage_suggestion);
        self.view
            .set_result_text(ResultField::WagnerGrade, &report.wagner_grade);
        self.update_necrosis_scale(&report.necrosis_stage_key);
        self.view.set_results_visible(true);
    }

    fn show_failure(&self, error: &AnalysisError) {
        self.view.set_result_text(
            ResultField::Analysis,
            &format!("{}{}", text::FAILURE_PREFIX, error),
        );
        self.view
            .set_result_text(ResultField::Suggestion, text::EMPTY_FIELD);
        self.view
            .set_result_text(ResultField::WagnerGrade, text::EMPTY_FIELD);
        self.view
            .set_result_text(ResultField::NecrosisStatus, text::STAGE_ERROR);
        self.clear_scale();
        self.view.set_results_visible(true);
    }

    /// Runs after every submission attempt, whatever the outcome.
    fn finish_submission(&self) {
        self.view.set_loading(false);
        if self.has_selection() {
            self.view.set_submit_enabled(true);
        }
    }

    fn clear_selection(&self, label: &str) {
        *self.selected.borrow_mut() = None;
        self.view.set_file_name(label);
        self.view.set_submit_enabled(false);
        self.view.hide_preview();
        self.view.set_results_visible(false);
    }

    fn reset_results(&self) {
        self.view.set_results_visible(false);
        self.view
            .set_result_text(ResultField::Analysis, text::EMPTY_FIELD);
        self.view
            .set_result_text(ResultField::Suggestion, text::EMPTY_FIELD);
        self.view
            .set_result_text(ResultField::WagnerGrade, text::EMPTY_FIELD);
        self.view.set_result_text(ResultField::NecrosisStatus, "");
        self.clear_scale();
    }

    fn clear_scale(&self) {
        for index in 0..self.scale.len() {
            self.view.set_segment_active(index, false);
        }
    }
}
