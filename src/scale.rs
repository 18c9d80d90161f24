//! Necrosis scale catalog and highlight rule.
//!
//! The page supplies a fixed, ordered set of segments. Resolving a stage key
//! yields which segment to highlight (at most one) and the status text. The
//! result depends only on the key and the catalog, so applying it twice gives
//! the same visible state.

use crate::constants::{UNKNOWN_STAGE, text};

/// One marker on the necrosis scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleSegment {
    /// Stage tag (`data-stage`)
    pub stage: String,
    /// Human-readable description (`title`)
    pub label: Option<String>,
}

impl ScaleSegment {
    pub fn new(stage: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Outcome of resolving a stage key against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleUpdate {
    /// Index of the segment to highlight
    pub active: Option<usize>,
    /// Description placed after the status prefix
    pub description: String,
}

impl ScaleUpdate {
    /// Full text for the necrosis status line.
    pub fn status_text(&self) -> String {
        format!("{}{}", text::STATUS_PREFIX, self.description)
    }
}

/// The page's ordered necrosis scale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NecrosisScale {
    segments: Vec<ScaleSegment>,
}

impl NecrosisScale {
    pub fn new(segments: Vec<ScaleSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[ScaleSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Index of the first segment tagged `stage`. An empty key matches nothing,
    /// so untagged segments are never selected.
    pub fn position(&self, stage: &str) -> Option<usize> {
        if stage.is_empty() {
            return None;
        }
        self.segments.iter().position(|s| s.stage == stage)
    }

    /// Decide which segment a stage key highlights.
    ///
    /// A known key highlights its segment and is described by the segment's
    /// label (or the key itself when unlabeled). Any other key falls back to
    /// the `unknown` segment, when the catalog has one, and is always described
    /// as unclassified.
    pub fn resolve(&self, stage_key: &str) -> ScaleUpdate {
        if let Some(index) = self.position(stage_key) {
            let description = self.segments[index]
                .label
                .as_deref()
                .filter(|label| !label.is_empty())
                .unwrap_or(stage_key)
                .to_string();
            return ScaleUpdate {
                active: Some(index),
                description,
            };
        }

        ScaleUpdate {
            active: self.position(UNKNOWN_STAGE),
            description: text::UNCLASSIFIED_STATUS.to_string(),
        }
    }
}
