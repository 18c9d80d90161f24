//! Display surface driven by the upload controller.

use crate::scale::ScaleSegment;

/// Text targets in the results panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResultField {
    Analysis,
    Suggestion,
    WagnerGrade,
    NecrosisStatus,
}

/// The page regions the controller updates.
///
/// Operations are infallible from the controller's point of view; an
/// implementation that can fail (the DOM) logs and carries on.
pub trait UploadView {
    /// The necrosis scale markers, in page order. Read once at startup.
    fn scale_segments(&self) -> Vec<ScaleSegment>;

    fn set_file_name(&self, name: &str);

    fn set_submit_enabled(&self, enabled: bool);

    /// Show the preview image and hide its placeholder.
    fn show_preview(&self, source: &str);

    /// Hide the preview image and show its placeholder.
    fn hide_preview(&self);

    fn set_loading(&self, visible: bool);

    fn set_results_visible(&self, visible: bool);

    fn set_result_text(&self, field: ResultField, text: &str);

    /// Toggle the highlight of the scale segment at `index`.
    fn set_segment_active(&self, index: usize, active: bool);

    /// Blocking user-facing warning.
    fn alert(&self, message: &str);
}
