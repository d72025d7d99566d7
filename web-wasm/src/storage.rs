//! API key persistence (localStorage)

use gloo::storage::{LocalStorage, Storage};

const API_KEY_STORAGE_KEY: &str = "agriscan.api-key";

pub fn load_api_key() -> Option<String> {
    LocalStorage::get(API_KEY_STORAGE_KEY).ok()
}

pub fn save_api_key(api_key: &str) -> Result<(), String> {
    LocalStorage::set(API_KEY_STORAGE_KEY, api_key)
        .map_err(|e| format!("failed to save key: {:?}", e))
}

pub fn clear_api_key() {
    LocalStorage::delete(API_KEY_STORAGE_KEY);
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_api_key_roundtrip() {
        clear_api_key();
        assert!(load_api_key().is_none());

        save_api_key("test-key-123").expect("save failed");
        assert_eq!(load_api_key().as_deref(), Some("test-key-123"));

        clear_api_key();
        assert!(load_api_key().is_none());
    }

    #[wasm_bindgen_test]
    fn wasm_save_replaces_existing_key() {
        save_api_key("first-key").expect("save failed");
        save_api_key("second-key").expect("save failed");
        assert_eq!(load_api_key().as_deref(), Some("second-key"));

        clear_api_key();
    }
}
