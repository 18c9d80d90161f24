//! Tests for submission and response handling.

use std::pin::pin;

use super::fakes::{
    FakeFile, FakeService, FakeView, Gate, Reply, controller_with, default_segments, poll_once,
    select, submit,
};
use crate::controller::UploadController;
use crate::view::ResultField;

const FULL_BODY: &str = r#"{"analysis":"Mild inflammation","suggestion":"Hydrocolloid dressing","possible_wagner_grade":"Grade 1","necrosis_stage":"stage2"}"#;

#[test]
fn test_successful_analysis_renders_all_fields() {
    let controller = controller_with(vec![Reply::ok(FULL_BODY)]);
    select(&controller, FakeFile::png("wound.png"));

    submit(&controller);

    let view = controller.view();
    assert_eq!(view.text(ResultField::Analysis), "Mild inflammation");
    assert_eq!(view.text(ResultField::Suggestion), "Hydrocolloid dressing");
    assert_eq!(view.text(ResultField::WagnerGrade), "Grade 1");
    assert_eq!(
        view.text(ResultField::NecrosisStatus),
        "AI Assessed Status: Stage 2: Superficial slough"
    );

    let state = view.state();
    assert_eq!(state.active.iter().copied().collect::<Vec<_>>(), vec![1]);
    assert!(state.results_visible);
    assert!(!state.loading);
    assert!(state.submit_enabled);
    assert_eq!(controller.service().uploaded(), vec!["wound.png"]);
}

#[test]
fn test_submit_side_effect_order() {
    let controller = controller_with(vec![Reply::ok(FULL_BODY)]);
    select(&controller, FakeFile::png("wound.png"));
    let before = controller.view().state().toggles.len();

    submit(&controller);

    let state = controller.view().state();
    assert_eq!(
        state.toggles[before..],
        [
            "loading:true",
            "results:false",
            "submit:false",
            "results:true",
            "loading:false",
            "submit:true",
        ]
    );
}

#[test]
fn test_empty_body_shows_placeholders() {
    let controller = controller_with(vec![Reply::ok("{}")]);
    select(&controller, FakeFile::png("wound.png"));

    submit(&controller);

    let view = controller.view();
    assert_eq!(view.text(ResultField::Analysis), "Could not retrieve analysis summary.");
    assert_eq!(view.text(ResultField::Suggestion), "Could not retrieve bandage recommendation.");
    assert_eq!(view.text(ResultField::WagnerGrade), "Could not retrieve DFU stage information.");
    assert_eq!(view.text(ResultField::NecrosisStatus), "AI Assessed Status: Unknown");
    assert_eq!(view.state().active.iter().copied().collect::<Vec<_>>(), vec![5]);
}

#[test]
fn test_server_error_message_from_body() {
    let controller = controller_with(vec![Reply::status(
        500,
        "Internal Server Error",
        r#"{"error":"model unavailable"}"#,
    )]);
    select(&controller, FakeFile::png("wound.png"));

    submit(&controller);

    let view = controller.view();
    assert_eq!(view.text(ResultField::Analysis), "Analysis failed: model unavailable");
    assert_eq!(view.text(ResultField::Suggestion), "-");
    assert_eq!(view.text(ResultField::WagnerGrade), "-");
    assert_eq!(
        view.text(ResultField::NecrosisStatus),
        "Could not determine stage due to error."
    );
    let state = view.state();
    assert!(state.active.is_empty());
    assert!(state.results_visible);
    assert!(!state.loading);
    assert!(state.submit_enabled);
}

#[test]
fn test_server_error_without_json_body() {
    let controller = controller_with(vec![Reply::status(502, "Bad Gateway", "<h1>502</h1>")]);
    select(&controller, FakeFile::png("wound.png"));

    submit(&controller);

    assert_eq!(
        controller.view().text(ResultField::Analysis),
        "Analysis failed: Server error: 502 Bad Gateway"
    );
}

#[test]
fn test_network_failure_keeps_file_selected() {
    let controller = controller_with(vec![Reply::NetworkFailure("Failed to fetch")]);
    select(&controller, FakeFile::png("wound.png"));

    submit(&controller);

    let view = controller.view();
    assert_eq!(view.text(ResultField::Analysis), "Analysis failed: Failed to fetch");
    let state = view.state();
    assert!(!state.loading);
    assert!(state.submit_enabled);
    assert!(state.results_visible);
    drop(state);
    assert!(controller.has_selection());
}

#[test]
fn test_malformed_success_body_is_a_failure() {
    let controller = controller_with(vec![Reply::ok("not json")]);
    select(&controller, FakeFile::png("wound.png"));

    submit(&controller);

    let view = controller.view();
    assert!(view.text(ResultField::Analysis).starts_with("Analysis failed: "));
    assert_eq!(
        view.text(ResultField::NecrosisStatus),
        "Could not determine stage due to error."
    );
    assert!(view.state().active.is_empty());
}

#[test]
fn test_failure_clears_earlier_highlight() {
    let controller = controller_with(vec![
        Reply::ok(FULL_BODY),
        Reply::NetworkFailure("connection reset"),
    ]);
    select(&controller, FakeFile::png("wound.png"));

    submit(&controller);
    assert_eq!(controller.view().state().active.len(), 1);

    submit(&controller);
    assert!(controller.view().state().active.is_empty());
    assert_eq!(controller.service().uploaded(), vec!["wound.png", "wound.png"]);
}

#[test]
fn test_submit_without_selection_alerts() {
    let controller = controller_with(vec![]);

    submit(&controller);

    let state = controller.view().state();
    assert_eq!(state.alerts, vec!["Please select an image first."]);
    assert!(!state.loading);
    assert!(!state.submit_enabled);
    assert!(!state.toggles.contains(&"loading:true".to_string()));
    drop(state);
    assert!(controller.service().uploaded().is_empty());
}

#[test]
fn test_submit_disabled_while_in_flight() {
    let gate = Gate::default();
    let controller = UploadController::new(
        FakeView::new(default_segments()),
        FakeService::with_replies(vec![Reply::ok(FULL_BODY)]).gated(&gate),
    );
    select(&controller, FakeFile::png("wound.png"));

    let mut request = pin!(controller.submit_for_analysis());
    assert!(poll_once(request.as_mut()).is_pending());
    {
        let state = controller.view().state();
        assert!(state.loading);
        assert!(!state.submit_enabled);
        assert!(!state.results_visible);
    }

    gate.open();
    assert!(poll_once(request.as_mut()).is_ready());
    let state = controller.view().state();
    assert!(!state.loading);
    assert!(state.submit_enabled);
    assert!(state.results_visible);
}

#[test]
fn test_invalid_selection_during_flight_leaves_submit_disabled() {
    let gate = Gate::default();
    let controller = UploadController::new(
        FakeView::new(default_segments()),
        FakeService::with_replies(vec![Reply::ok(FULL_BODY)]).gated(&gate),
    );
    select(&controller, FakeFile::png("wound.png"));

    let mut request = pin!(controller.submit_for_analysis());
    assert!(poll_once(request.as_mut()).is_pending());

    select(&controller, FakeFile::new("notes.pdf", "application/pdf"));

    gate.open();
    assert!(poll_once(request.as_mut()).is_ready());
    let state = controller.view().state();
    assert!(!state.loading);
    assert!(!state.submit_enabled);
}

#[test]
fn test_new_valid_selection_during_flight_reenables_submit() {
    let gate = Gate::default();
    let controller = UploadController::new(
        FakeView::new(default_segments()),
        FakeService::with_replies(vec![Reply::NetworkFailure("offline")]).gated(&gate),
    );
    select(&controller, FakeFile::png("first.png"));

    let mut request = pin!(controller.submit_for_analysis());
    assert!(poll_once(request.as_mut()).is_pending());

    select(&controller, FakeFile::png("second.png"));

    gate.open();
    assert!(poll_once(request.as_mut()).is_ready());
    let state = controller.view().state();
    assert!(state.submit_enabled);
    assert_eq!(state.file_name, "second.png");
    drop(state);
    assert_eq!(controller.service().uploaded(), vec!["first.png"]);
}
