//! Analysis results panel
//!
//! Three render branches: not a plant, healthy plant, diseased plant. The
//! non-plant branch wins regardless of the other fields.

use agriscan_common::{confidence_percent, AnalysisResult};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelKind {
    NoPlant,
    Healthy,
    Diseased,
}

fn panel_kind(result: &AnalysisResult) -> PanelKind {
    if !result.is_plant {
        PanelKind::NoPlant
    } else if result.is_healthy() {
        PanelKind::Healthy
    } else {
        PanelKind::Diseased
    }
}

fn bullet_list(items: &[String]) -> impl IntoView {
    items
        .iter()
        .map(|item| view! { <li>{item.clone()}</li> })
        .collect_view()
}

#[component]
pub fn ResultsPanel(result: AnalysisResult) -> impl IntoView {
    let kind = panel_kind(&result);

    if kind == PanelKind::NoPlant {
        return view! {
            <div class="result-card no-plant">
                <h2>"No Plant Detected"</h2>
                <p>
                    "The uploaded image doesn't look like a plant. \
                     Try a clear photo of a crop, leaf, or stem for an accurate diagnosis."
                </p>
            </div>
        }
        .into_any();
    }

    let percent = confidence_percent(result.confidence);
    let status_class = match kind {
        PanelKind::Healthy => "result-card healthy",
        _ => "result-card diseased",
    };

    view! {
        <div class=status_class>
            <div class="diagnosis-header">
                <span class="status-badge">{result.health_status.as_str()}</span>
                <h2>{result.disease_name.clone()}</h2>
                <p class="description">{result.description.clone()}</p>
            </div>

            <div class="confidence">
                <span class="confidence-label">"AI Confidence"</span>
                <span class="confidence-value">{format!("{}%", percent)}</span>
                <div class="confidence-bar">
                    <div
                        class="confidence-fill"
                        style=format!("width: {}%", percent)
                    />
                </div>
            </div>

            <div class="detail-grid">
                <div class="detail-card">
                    <h3>"Symptoms"</h3>
                    <ul>{bullet_list(&result.symptoms)}</ul>
                </div>

                <div class="detail-card">
                    <h3>"Treatments"</h3>
                    {if kind == PanelKind::Healthy {
                        view! {
                            <p class="placeholder">"No treatment needed for a healthy plant!"</p>
                        }
                        .into_any()
                    } else {
                        view! { <ul>{bullet_list(&result.treatments)}</ul> }.into_any()
                    }}
                </div>

                <div class="detail-card">
                    <h3>"Prevention"</h3>
                    <ul>{bullet_list(&result.preventative_measures)}</ul>
                </div>
            </div>
        </div>
    }
    .into_any()
}
