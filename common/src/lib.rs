//! AgriScan Common Library
//!
//! Types and logic shared between the CLI and the Web (WASM) app.

pub mod types;
pub mod error;
pub mod prompts;
pub mod parser;
pub mod gemini;

pub use types::{confidence_percent, AnalysisResult, HealthStatus};
pub use error::{AgriScanError, Result, USER_FACING_ERROR};
pub use prompts::{response_schema, ANALYSIS_PROMPT, DEFAULT_MODEL};
pub use parser::{extract_json, parse_analysis_response};
pub use gemini::{
    extract_base64_from_data_url, extract_mime_type_from_data_url, generate_content_url,
    GenerateContentRequest, GenerateContentResponse,
};
