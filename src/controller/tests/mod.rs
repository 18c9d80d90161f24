//! Unit tests for the upload controller.
//!
//! These drive the controller against a recording view and a scripted
//! analysis service, covering selection, submission and scale updates.

mod selection_tests;
mod submit_tests;
