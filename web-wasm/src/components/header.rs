//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"AgriScan - AI Plant Disease Diagnosis"</h1>
            <p class="tagline">
                "Upload a photo of a crop to get a diagnosis, treatment plan, and prevention tips."
            </p>
        </header>
    }
}
