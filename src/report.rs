//! Terminal report formatting

use agriscan_common::{confidence_percent, AnalysisResult};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

// {msg} carries the file currently being analyzed
const PROGRESS_TEMPLATE: &str = "{bar:40.green} {pos}/{len} {msg}";

/// Progress bar for folder batches
pub fn batch_progress(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(ProgressStyle::with_template(PROGRESS_TEMPLATE).unwrap());
    pb
}

/// One diagnosis record for JSON output
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisRecord {
    pub file_name: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

/// Human-readable report for one diagnosis
pub fn format_report(file_name: &str, result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("── {} ──\n", file_name));

    if !result.is_plant {
        out.push_str("No plant detected.\n");
        out.push_str("Upload a clear photo of a crop, leaf, or stem for an accurate diagnosis.\n");
        return out;
    }

    out.push_str(&format!(
        "Status:     {}\n",
        result.health_status.as_str()
    ));
    out.push_str(&format!("Diagnosis:  {}\n", result.disease_name));
    out.push_str(&format!(
        "Confidence: {}%\n",
        confidence_percent(result.confidence)
    ));

    if !result.description.is_empty() {
        out.push_str(&format!("\n{}\n", result.description));
    }

    if !result.symptoms.is_empty() {
        out.push_str("\nSymptoms:\n");
        for symptom in &result.symptoms {
            out.push_str(&format!("  - {}\n", symptom));
        }
    }

    out.push_str("\nTreatments:\n");
    if result.is_healthy() {
        out.push_str("  No treatment needed for a healthy plant.\n");
    } else if result.treatments.is_empty() {
        out.push_str("  (none suggested)\n");
    } else {
        for treatment in &result.treatments {
            out.push_str(&format!("  - {}\n", treatment));
        }
    }

    if !result.preventative_measures.is_empty() {
        out.push_str("\nPrevention:\n");
        for measure in &result.preventative_measures {
            out.push_str(&format!("  - {}\n", measure));
        }
    }

    out
}
