//! Upload area component
//!
//! Drag & drop or click-to-pick for a single photo. Non-image files are
//! rejected with a blocking alert before any state changes.

use crate::state::SelectedImage;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader};

fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

#[component]
pub fn UploadArea<F, FC>(
    image: Signal<Option<SelectedImage>>,
    disabled: Signal<bool>,
    on_image_selected: F,
    on_clear: FC,
) -> impl IntoView
where
    F: Fn(SelectedImage) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let handle_file = {
        let on_image_selected = on_image_selected.clone();
        move |file: File| {
            if !is_image_mime(&file.type_()) {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message("Please upload an image file.");
                }
                return;
            }
            read_file(file, on_image_selected.clone());
        }
    };

    let on_drop = {
        let handle_file = handle_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if disabled.get_untracked() {
                return;
            }

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    if let Some(file) = files.get(0) {
                        handle_file(file);
                    }
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !disabled.get_untracked() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let handle_file = handle_file.clone();
        move |_| {
            if disabled.get_untracked() {
                return;
            }

            // open the file picker
            let document = web_sys::window().unwrap().document().unwrap();
            let input: web_sys::HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept("image/*");

            let handle_file = handle_file.clone();
            let picker = input.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(files) = picker.files() {
                    if let Some(file) = files.get(0) {
                        handle_file(file);
                    }
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if disabled.get() {
                    classes.push("disabled");
                }
                if image.with(|i| i.is_some()) {
                    classes.push("hidden");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📷"</div>
            <p>"Drag & drop a plant photo, or click to browse"</p>
            <p class="text-muted">"Supported formats: JPEG, PNG, WebP"</p>
        </div>

        <div
            class=move || {
                if image.with(|i| i.is_some()) {
                    "preview-card"
                } else {
                    "preview-card hidden"
                }
            }
        >
            <img
                src=move || image.get().map(|i| i.data_url).unwrap_or_default()
                alt=move || image.get().map(|i| i.file_name).unwrap_or_default()
            />
            <button
                class=move || {
                    if disabled.get() {
                        "clear-btn hidden"
                    } else {
                        "clear-btn"
                    }
                }
                title="Remove image"
                on:click=move |_| on_clear(())
            >
                "×"
            </button>
        </div>
    }
}

fn read_file<F>(file: File, on_image_selected: F)
where
    F: Fn(SelectedImage) + 'static,
{
    let file_name = file.name();
    let mime_type = file.type_();
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_image_selected(SelectedImage {
                    file_name: file_name.clone(),
                    mime_type: mime_type.clone(),
                    data_url,
                });
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
