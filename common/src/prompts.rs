//! Fixed instruction prompt and response schema
//!
//! The schema is sent as `generationConfig.responseSchema`, which makes
//! the model emit JSON matching the declared field/type shape instead of
//! free-form prose.

use serde_json::{json, Value};

/// Default Gemini model used by both the CLI and the web app
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Instruction text sent alongside the image
pub const ANALYSIS_PROMPT: &str = "Analyze this image. Determine if it is a plant crop. \
If it is, identify any diseases, pests, or nutritional deficiencies. \
Provide a detailed diagnosis, symptoms seen, recommended treatments, and prevention tips. \
If the plant is healthy, state that. If the image is not a plant, set isPlant to false.";

/// Response schema declared to the model
///
/// `confidence` is deliberately absent from the required list; the model
/// may omit it and the result type defaults it to 0.0.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "isPlant": {
                "type": "BOOLEAN",
                "description": "Whether the image contains a plant, leaf, or crop."
            },
            "diseaseName": {
                "type": "STRING",
                "description": "The name of the identified disease, or 'None' if healthy."
            },
            "healthStatus": {
                "type": "STRING",
                "enum": ["Healthy", "Diseased", "Unknown"],
                "description": "General health status of the plant."
            },
            "confidence": {
                "type": "NUMBER",
                "description": "Confidence score between 0 and 1."
            },
            "description": {
                "type": "STRING",
                "description": "A brief explanation of the finding."
            },
            "symptoms": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of visible symptoms identified."
            },
            "treatments": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Recommended treatments or cures."
            },
            "preventativeMeasures": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Steps to prevent future occurrences."
            }
        },
        "required": [
            "isPlant", "healthStatus", "diseaseName", "description",
            "symptoms", "treatments", "preventativeMeasures"
        ]
    })
}
