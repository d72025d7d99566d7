//! Main application component
//!
//! Owns the phase state machine and the API key signals; the components
//! below it are presentation only.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{
    header::Header, results_panel::ResultsPanel, settings_panel::SettingsPanel,
    upload_area::UploadArea,
};
use crate::state::{AppModel, Phase, SelectedImage};
use crate::storage;
use agriscan_common::USER_FACING_ERROR;

#[component]
pub fn App() -> impl IntoView {
    let model = RwSignal::new(AppModel::default());
    let (api_key, set_api_key) = signal(storage::load_api_key().unwrap_or_default());
    let (api_key_status, set_api_key_status) = signal(String::new());

    let on_save_api_key = move |_| match storage::save_api_key(&api_key.get_untracked()) {
        Ok(()) => set_api_key_status.set("API key saved".to_string()),
        Err(e) => set_api_key_status.set(e),
    };

    let on_clear_api_key = move |_| {
        storage::clear_api_key();
        set_api_key.set(String::new());
        set_api_key_status.set("API key cleared".to_string());
    };

    let on_image_selected =
        move |image: SelectedImage| model.update(|m| m.image_selected(image));
    let on_clear_image = move |_| model.update(|m| m.clear_image());
    let on_retry = move |_| model.update(|m| m.retry());

    let on_analyze = move |_| {
        let Some(image) = model.with_untracked(|m| m.image.clone()) else {
            return;
        };
        let started = model
            .try_update(|m| m.analysis_started())
            .unwrap_or(false);
        if !started {
            return;
        }

        let key = api_key.get_untracked();
        spawn_local(async move {
            match api::gemini::analyze_plant_image(&key, &image.data_url).await {
                Ok(result) => model.update(|m| m.analysis_succeeded(result)),
                Err(e) => {
                    gloo::console::error!(format!("analysis failed: {}", e));
                    model.update(|m| m.analysis_failed(USER_FACING_ERROR.to_string()));
                }
            }
        });
    };

    let phase = move || model.with(|m| m.phase);
    let selected_image = Signal::derive(move || model.with(|m| m.image.clone()));
    let is_analyzing = Signal::derive(move || model.with(|m| m.phase == Phase::Analyzing));

    view! {
        <div class="container">
            <Header />

            <SettingsPanel
                api_key=api_key
                set_api_key=set_api_key
                api_key_status=api_key_status
                on_save=on_save_api_key
                on_clear=on_clear_api_key
            />

            <UploadArea
                image=selected_image
                disabled=is_analyzing
                on_image_selected=on_image_selected
                on_clear=on_clear_image
            />

            <Show when=move || model.with(|m| m.can_analyze())>
                <button class="btn btn-primary analyze-btn" on:click=on_analyze>
                    "Analyze Diagnosis"
                </button>
            </Show>

            <Show when=move || phase() == Phase::Analyzing>
                <div class="analyzing">
                    <div class="spinner"></div>
                    <p>"Analyzing plant health..."</p>
                    <p class="text-muted">"Checking symptoms and identifying pests"</p>
                </div>
            </Show>

            <Show when=move || phase() == Phase::Error>
                <div class="error-card">
                    <p>{move || model.with(|m| m.error.clone().unwrap_or_default())}</p>
                    <button class="btn btn-link" on:click=on_retry>
                        "Try Again"
                    </button>
                </div>
            </Show>

            <Show when=move || phase() == Phase::Success>
                {move || {
                    model
                        .with(|m| m.result.clone())
                        .map(|result| view! { <ResultsPanel result=result /> })
                }}
            </Show>
        </div>
    }
}
