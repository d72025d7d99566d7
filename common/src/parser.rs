//! Model response parser
//!
//! Extracts the JSON payload from the model's response text and
//! deserializes it into an [`AnalysisResult`]. With `responseSchema` the
//! text is normally bare JSON, but a fenced block or surrounding prose is
//! tolerated.

use crate::error::{AgriScanError, Result};
use crate::types::AnalysisResult;

/// Extract the JSON portion of a response
///
/// Lookup order:
/// 1. ```json ... ``` fenced block
/// 2. raw {...} object
/// 3. error
pub fn extract_json(response: &str) -> Result<&str> {
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // length of "```json"
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(AgriScanError::Parse("no JSON found in response".into()))
}

/// Parse the model's response text into a diagnosis
pub fn parse_analysis_response(response: &str) -> Result<AnalysisResult> {
    let json_str = extract_json(response)?;
    let result: AnalysisResult = serde_json::from_str(json_str.trim())
        .map_err(|e| AgriScanError::Parse(format!("JSON parse error: {}", e)))?;
    Ok(result)
}
