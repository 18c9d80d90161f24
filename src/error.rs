//! Error types for upload and analysis.

use thiserror::Error;

/// Errors that can occur between picking a file and showing its analysis.
///
/// The `Display` text of the request-side variants is what the results panel
/// shows after the "Analysis failed: " prefix.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Selected file is not an image; never sent to the server
    #[error("Unsupported media type '{media_type}'")]
    Validation {
        /// Declared media type of the rejected file
        media_type: String,
    },

    /// Server answered with a non-success status
    #[error("{message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Message from the error body, or a synthesized status line
        message: String,
    },

    /// Request could not complete (connectivity, CORS, DNS)
    #[error("{0}")]
    Network(String),

    /// Success status but the body is not JSON
    #[error("{0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// File could not be read for the preview image
    #[error("Preview unavailable: {0}")]
    Preview(String),
}

impl AnalysisError {
    /// Create a network error with a message.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create a validation error for a media type.
    pub fn validation(media_type: impl Into<String>) -> Self {
        Self::Validation {
            media_type: media_type.into(),
        }
    }
}
