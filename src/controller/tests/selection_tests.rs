//! Tests for file selection and validation.

use std::pin::pin;

use super::fakes::{FakeFile, Gate, controller_with, poll_once, select, submit};
use crate::view::ResultField;

#[test]
fn test_valid_image_enables_submit_and_previews() {
    let controller = controller_with(vec![]);
    let file = FakeFile::png("wound.png");
    let source = file.preview_source();

    select(&controller, file);

    let view = controller.view().state();
    assert_eq!(view.file_name, "wound.png");
    assert!(view.submit_enabled);
    assert_eq!(view.preview.as_deref(), Some(source.as_str()));
    assert!(view.alerts.is_empty());
    drop(view);
    assert!(controller.has_selection());
}

#[test]
fn test_non_image_is_rejected() {
    let controller = controller_with(vec![]);

    select(&controller, FakeFile::new("notes.pdf", "application/pdf"));

    let view = controller.view().state();
    assert_eq!(view.alerts, vec!["Please select an image file (e.g., JPG, PNG, WEBP)."]);
    assert_eq!(view.file_name, "Invalid file type");
    assert!(!view.submit_enabled);
    assert_eq!(view.preview, None);
    assert!(!view.results_visible);
    drop(view);
    assert!(!controller.has_selection());
}

#[test]
fn test_rejection_replaces_previous_valid_selection() {
    let controller = controller_with(vec![]);
    select(&controller, FakeFile::png("wound.png"));

    for media_type in ["application/pdf", "", "text/plain", "video/mp4"] {
        select(&controller, FakeFile::new("other", media_type));

        let view = controller.view().state();
        assert!(!view.submit_enabled, "{}", media_type);
        assert_eq!(view.preview, None, "{}", media_type);
        drop(view);
        assert!(!controller.has_selection(), "{}", media_type);
    }
}

#[test]
fn test_rejected_file_never_reaches_the_network() {
    let controller = controller_with(vec![]);

    select(&controller, FakeFile::new("notes.pdf", "application/pdf"));
    submit(&controller);

    assert!(controller.service().uploaded().is_empty());
    let view = controller.view().state();
    assert_eq!(view.alerts.last().map(String::as_str), Some("Please select an image first."));
    assert!(!view.submit_enabled);
    assert!(!view.loading);
}

#[test]
fn test_cancelled_picker_clears_selection() {
    let controller = controller_with(vec![]);
    select(&controller, FakeFile::png("wound.png"));
    controller.view().seed_stale_results();

    pollster::block_on(controller.handle_file_selected(None));

    let view = controller.view().state();
    assert_eq!(view.file_name, "No file selected");
    assert!(!view.submit_enabled);
    assert_eq!(view.preview, None);
    assert!(!view.results_visible);
    assert!(view.alerts.is_empty());
    drop(view);
    assert!(!controller.has_selection());
}

#[test]
fn test_new_selection_clears_previous_results() {
    let controller = controller_with(vec![]);
    controller.view().seed_stale_results();

    select(&controller, FakeFile::new("heel.jpg", "image/jpeg"));

    let view = controller.view();
    assert_eq!(view.text(ResultField::Analysis), "-");
    assert_eq!(view.text(ResultField::Suggestion), "-");
    assert_eq!(view.text(ResultField::WagnerGrade), "-");
    assert_eq!(view.text(ResultField::NecrosisStatus), "");
    let state = view.state();
    assert!(state.active.is_empty());
    assert!(!state.results_visible);
    assert!(state.submit_enabled);
}

#[test]
fn test_unreadable_file_keeps_placeholder() {
    let controller = controller_with(vec![]);

    select(&controller, FakeFile::png("wound.png").unreadable());

    let view = controller.view().state();
    assert_eq!(view.preview, None);
    assert!(view.submit_enabled);
    drop(view);
    assert!(controller.has_selection());
}

#[test]
fn test_unreadable_file_hides_previous_preview() {
    let controller = controller_with(vec![]);
    select(&controller, FakeFile::png("first.png"));
    assert!(controller.view().state().preview.is_some());

    select(&controller, FakeFile::png("second.png").unreadable());

    let view = controller.view().state();
    assert_eq!(view.file_name, "second.png");
    assert_eq!(view.preview, None);
    assert!(view.submit_enabled);
}

#[test]
fn test_pending_preview_hides_previous_image() {
    let controller = controller_with(vec![]);
    let gate = Gate::default();
    select(&controller, FakeFile::png("first.png"));

    let mut second = pin!(controller.handle_file_selected(Some(FakeFile::png("second.png").gated(&gate))));
    assert!(poll_once(second.as_mut()).is_pending());
    assert_eq!(controller.view().state().preview, None);

    gate.open();
    assert!(poll_once(second.as_mut()).is_ready());
    assert!(controller.view().state().preview.is_some());
}

#[test]
fn test_stale_preview_is_discarded() {
    let controller = controller_with(vec![]);
    let gate = Gate::default();
    let slow = FakeFile::png("first.png").gated(&gate);
    let fast = FakeFile::png("second.png");
    let fast_source = fast.preview_source();

    let mut first = pin!(controller.handle_file_selected(Some(slow)));
    assert!(poll_once(first.as_mut()).is_pending());

    select(&controller, fast);
    assert_eq!(controller.view().state().preview.as_deref(), Some(fast_source.as_str()));

    gate.open();
    assert!(poll_once(first.as_mut()).is_ready());

    let view = controller.view().state();
    assert_eq!(view.preview.as_deref(), Some(fast_source.as_str()));
    assert_eq!(view.file_name, "second.png");
}

#[test]
fn test_preview_pending_does_not_block_submit() {
    let controller = controller_with(vec![super::fakes::Reply::ok("{}")]);
    let gate = Gate::default();

    let mut selecting = pin!(controller.handle_file_selected(Some(FakeFile::png("big.png").gated(&gate))));
    assert!(poll_once(selecting.as_mut()).is_pending());
    assert!(controller.view().state().submit_enabled);

    submit(&controller);
    assert_eq!(controller.service().uploaded(), vec!["big.png"]);

    gate.open();
    assert!(poll_once(selecting.as_mut()).is_ready());
    assert!(controller.view().state().preview.is_some());
}
