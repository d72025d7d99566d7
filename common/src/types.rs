//! Diagnosis result types
//!
//! Shared between the CLI and the Web (WASM) app:
//! - HealthStatus: overall verdict for the photographed plant
//! - AnalysisResult: one diagnosis, produced per successful model call

use serde::{Deserialize, Serialize};

/// General health status reported by the model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Diseased,
    /// Fallback for anything the model reports outside the declared enum
    #[default]
    #[serde(other)]
    Unknown,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Diseased => "Diseased",
            HealthStatus::Unknown => "Unknown",
        }
    }
}

/// AI diagnosis result
///
/// Field names follow the JSON schema declared in the request, so this
/// deserializes straight from the model's response text. Immutable once
/// produced; discarded when the user clears or replaces the image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    pub is_plant: bool,
    pub disease_name: String,
    pub health_status: HealthStatus,

    /// Confidence score in [0, 1]. Declared in the schema but not in its
    /// required list, so it defaults to 0.0 when the model omits it.
    pub confidence: f64,

    pub description: String,
    pub symptoms: Vec<String>,
    pub treatments: Vec<String>,
    pub preventative_measures: Vec<String>,
}

impl AnalysisResult {
    pub fn is_healthy(&self) -> bool {
        self.health_status == HealthStatus::Healthy
    }
}

/// Render a [0, 1] confidence score as a whole percentage (0.873 -> 87)
pub fn confidence_percent(confidence: f64) -> u8 {
    (confidence * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // HealthStatus tests
    // =============================================

    #[test]
    fn test_health_status_deserialize() {
        let status: HealthStatus = serde_json::from_str("\"Healthy\"").unwrap();
        assert_eq!(status, HealthStatus::Healthy);

        let status: HealthStatus = serde_json::from_str("\"Diseased\"").unwrap();
        assert_eq!(status, HealthStatus::Diseased);
    }

    #[test]
    fn test_health_status_unrecognized_falls_back_to_unknown() {
        let status: HealthStatus = serde_json::from_str("\"Wilting\"").unwrap();
        assert_eq!(status, HealthStatus::Unknown);
    }

    #[test]
    fn test_health_status_serialize() {
        let json = serde_json::to_string(&HealthStatus::Diseased).unwrap();
        assert_eq!(json, "\"Diseased\"");
    }

    #[test]
    fn test_health_status_default() {
        assert_eq!(HealthStatus::default(), HealthStatus::Unknown);
    }

    // =============================================
    // AnalysisResult tests
    // =============================================

    #[test]
    fn test_analysis_result_default() {
        let result = AnalysisResult::default();
        assert!(!result.is_plant);
        assert_eq!(result.disease_name, "");
        assert_eq!(result.health_status, HealthStatus::Unknown);
        assert_eq!(result.confidence, 0.0);
        assert!(result.symptoms.is_empty());
    }

    #[test]
    fn test_analysis_result_deserialize() {
        let json = r#"{
            "isPlant": true,
            "diseaseName": "Late Blight",
            "healthStatus": "Diseased",
            "confidence": 0.92,
            "description": "Fungal infection on tomato leaves.",
            "symptoms": ["Brown lesions", "White mold on underside"],
            "treatments": ["Apply copper-based fungicide"],
            "preventativeMeasures": ["Rotate crops", "Avoid overhead watering"]
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.is_plant);
        assert_eq!(result.disease_name, "Late Blight");
        assert_eq!(result.health_status, HealthStatus::Diseased);
        assert_eq!(result.confidence, 0.92);
        assert_eq!(result.symptoms.len(), 2);
        assert_eq!(result.treatments.len(), 1);
        assert_eq!(result.preventative_measures.len(), 2);
    }

    #[test]
    fn test_analysis_result_deserialize_missing_confidence() {
        // confidence is not in the schema's required list
        let json = r#"{
            "isPlant": true,
            "diseaseName": "None",
            "healthStatus": "Healthy",
            "description": "Healthy leaf.",
            "symptoms": [],
            "treatments": [],
            "preventativeMeasures": []
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.confidence, 0.0);
        assert!(result.is_healthy());
    }

    #[test]
    fn test_analysis_result_serialize_camel_case() {
        let result = AnalysisResult {
            is_plant: true,
            disease_name: "Powdery Mildew".to_string(),
            health_status: HealthStatus::Diseased,
            confidence: 0.8,
            ..Default::default()
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"isPlant\":true"));
        assert!(json.contains("\"diseaseName\":\"Powdery Mildew\""));
        assert!(json.contains("\"healthStatus\":\"Diseased\""));
        assert!(json.contains("\"preventativeMeasures\":[]"));
    }

    #[test]
    fn test_is_healthy() {
        let mut result = AnalysisResult {
            health_status: HealthStatus::Healthy,
            ..Default::default()
        };
        assert!(result.is_healthy());

        result.health_status = HealthStatus::Diseased;
        assert!(!result.is_healthy());

        result.health_status = HealthStatus::Unknown;
        assert!(!result.is_healthy());
    }

    // =============================================
    // confidence_percent tests
    // =============================================

    #[test]
    fn test_confidence_percent_rounds() {
        assert_eq!(confidence_percent(0.873), 87);
        assert_eq!(confidence_percent(0.875), 88);
        assert_eq!(confidence_percent(0.0), 0);
        assert_eq!(confidence_percent(1.0), 100);
    }

    #[test]
    fn test_confidence_percent_clamps_out_of_range() {
        assert_eq!(confidence_percent(-0.5), 0);
        assert_eq!(confidence_percent(1.7), 100);
    }
}
