//! Global constants for the woundscan client

/// Analysis endpoint used when the page does not configure one
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5500/analyze";

/// Multipart field carrying the uploaded image
pub const DEFAULT_FIELD_NAME: &str = "image";

/// Media type prefix every accepted upload must start with
pub const IMAGE_MEDIA_PREFIX: &str = "image/";

/// Stage tag of the catch-all scale segment
pub const UNKNOWN_STAGE: &str = "unknown";

/// Element ids and selectors of the page markup.
pub mod ids {
    pub const FILE_INPUT: &str = "woundImage";
    pub const FILE_NAME: &str = "fileName";
    pub const SUBMIT_BUTTON: &str = "analyzeBtn";
    pub const IMAGE_PREVIEW: &str = "imagePreview";
    pub const PREVIEW_PLACEHOLDER: &str = "previewPlaceholder";
    pub const LOADING_INDICATOR: &str = "loadingIndicator";
    pub const RESULTS_SECTION: &str = "resultsSection";
    pub const ANALYSIS_TEXT: &str = "analysisResult";
    pub const SUGGESTION_TEXT: &str = "bandSuggestion";
    pub const WAGNER_GRADE_TEXT: &str = "wagnerGradeResult";
    pub const NECROSIS_TEXT: &str = "necrosisStageText";
    pub const CONFIG_SCRIPT: &str = "woundscanConfig";

    pub const SCALE_SEGMENT_SELECTOR: &str = ".scale-segment";
    pub const STAGE_ATTRIBUTE: &str = "data-stage";
    pub const LABEL_ATTRIBUTE: &str = "title";
}

/// User-facing text.
pub mod text {
    pub const NO_FILE_SELECTED: &str = "No file selected";
    pub const INVALID_FILE_TYPE: &str = "Invalid file type";
    pub const INVALID_FILE_ALERT: &str = "Please select an image file (e.g., JPG, PNG, WEBP).";
    pub const SELECT_IMAGE_FIRST: &str = "Please select an image first.";

    /// Shown in result fields that have nothing to display yet
    pub const EMPTY_FIELD: &str = "-";

    pub const MISSING_ANALYSIS: &str = "Could not retrieve analysis summary.";
    pub const MISSING_SUGGESTION: &str = "Could not retrieve bandage recommendation.";
    pub const MISSING_WAGNER_GRADE: &str = "Could not retrieve DFU stage information.";

    pub const UNCLASSIFIED_STATUS: &str = "Could not classify status";
    pub const STAGE_ERROR: &str = "Could not determine stage due to error.";
    pub const STATUS_PREFIX: &str = "AI Assessed Status: ";
    pub const FAILURE_PREFIX: &str = "Analysis failed: ";
}
