//! Error type definitions

use thiserror::Error;

/// Generic message shown to the user when an analysis fails.
///
/// EmptyResponse/Parse/Api are all collapsed into this one string at the
/// UI boundary; the detailed variant only goes to the console trace.
pub const USER_FACING_ERROR: &str = "Failed to analyze the image. Please try again.";

/// Shared error type
#[derive(Error, Debug)]
pub enum AgriScanError {
    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("failed to parse model response: {0}")]
    Parse(String),

    #[error("API call failed: {0}")]
    Api(String),

    #[error("no API key configured. Set GEMINI_API_KEY or run `agriscan config --set-api-key YOUR_KEY`")]
    MissingApiKey,

    #[error("could not read image: {0}")]
    InvalidImage(String),

    #[error("path not found: {0}")]
    NotFound(String),

    #[error("no images found in: {0}")]
    NoImagesFound(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AgriScanError>;
