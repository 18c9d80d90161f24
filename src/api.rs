//! Analysis endpoint contract.
//!
//! [`AnalysisService`] is the seam between the controller and the network.
//! Response interpretation lives here as plain functions over
//! `(status, status_text, body)` so it can be exercised without a browser.

use std::future::Future;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::constants::{UNKNOWN_STAGE, text};
use crate::error::AnalysisError;
use crate::file::ImageFile;

/// Sends one image to the analysis endpoint.
pub trait AnalysisService {
    /// File handle type this service can upload.
    type File: ImageFile;

    /// POST the file and return the decoded success body.
    ///
    /// Exactly one attempt is made; there is no retry or timeout here.
    fn analyze(
        &self,
        file: &Self::File,
    ) -> impl Future<Output = Result<AnalysisResponse, AnalysisError>>;
}

/// Success body of the analysis endpoint. Every field is optional.
///
/// Strings are taken as-is, numbers and `true` as their JSON text. `null`,
/// empty strings, `false`, zero, arrays and objects count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default, deserialize_with = "lenient_text")]
    pub analysis: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub suggestion: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub possible_wagner_grade: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub necrosis_stage: Option<String>,
}

impl AnalysisResponse {
    /// Decode a success body.
    ///
    /// A `null` body is malformed. Any other JSON value that is not an object
    /// has no fields. Array and object field values count as absent.
    pub fn from_json(body: &str) -> Result<Self, AnalysisError> {
        let value: Value = serde_json::from_str(body)?;
        match value {
            Value::Object(_) | Value::Null => Ok(serde_json::from_value(value)?),
            _ => Ok(Self::default()),
        }
    }
}

/// What the results panel shows for one successful analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub analysis_text: String,
    pub bandage_suggestion: String,
    pub wagner_grade: String,
    pub necrosis_stage_key: String,
}

impl From<AnalysisResponse> for AnalysisReport {
    fn from(response: AnalysisResponse) -> Self {
        Self {
            analysis_text: response
                .analysis
                .unwrap_or_else(|| text::MISSING_ANALYSIS.to_string()),
            bandage_suggestion: response
                .suggestion
                .unwrap_or_else(|| text::MISSING_SUGGESTION.to_string()),
            wagner_grade: response
                .possible_wagner_grade
                .unwrap_or_else(|| text::MISSING_WAGNER_GRADE.to_string()),
            necrosis_stage_key: response
                .necrosis_stage
                .unwrap_or_else(|| UNKNOWN_STAGE.to_string()),
        }
    }
}

/// Turn a completed HTTP exchange into a response or a failure.
pub fn interpret_response(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<AnalysisResponse, AnalysisError> {
    if (200..300).contains(&status) {
        return AnalysisResponse::from_json(body);
    }

    let message = error_body_message(body).unwrap_or_else(|| {
        format!("Server error: {} {}", status, status_text)
            .trim_end()
            .to_string()
    });
    Err(AnalysisError::Server { status, message })
}

/// The `error` field of a failure body, if the body is JSON and has one.
fn error_body_message(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => value.get("error").and_then(display_text),
        Err(e) => {
            log::debug!("Could not parse error response JSON: {}", e);
            None
        }
    }
}

fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(display_text(&value))
}
