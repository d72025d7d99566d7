//! Application phase state machine
//!
//! Kept separate from the components so the transitions are plain Rust:
//! exactly one phase is active, the result is only meaningful in Success,
//! and at most one analysis request is in flight (gated by Analyzing).

use agriscan_common::AnalysisResult;

/// Application phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Analyzing,
    Success,
    Error,
}

/// The user-selected image: original file name, MIME type, and the
/// FileReader data URL used both as preview and request payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub file_name: String,
    pub mime_type: String,
    pub data_url: String,
}

/// UI state driven only by user actions and the single call's outcome
#[derive(Debug, Clone, Default)]
pub struct AppModel {
    pub phase: Phase,
    pub image: Option<SelectedImage>,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
}

impl AppModel {
    /// A new image replaces the old one and resets any prior outcome.
    /// Ignored while a request is in flight (the uploader is disabled).
    pub fn image_selected(&mut self, image: SelectedImage) {
        if self.phase == Phase::Analyzing {
            return;
        }
        self.image = Some(image);
        self.phase = Phase::Idle;
        self.result = None;
        self.error = None;
    }

    /// Clearing returns to Idle with all derived state reset
    pub fn clear_image(&mut self) {
        if self.phase == Phase::Analyzing {
            return;
        }
        self.image = None;
        self.phase = Phase::Idle;
        self.result = None;
        self.error = None;
    }

    pub fn can_analyze(&self) -> bool {
        self.phase == Phase::Idle && self.image.is_some()
    }

    /// Enter Analyzing; returns false when no request may be started
    pub fn analysis_started(&mut self) -> bool {
        if !self.can_analyze() {
            return false;
        }
        self.phase = Phase::Analyzing;
        self.error = None;
        true
    }

    pub fn analysis_succeeded(&mut self, result: AnalysisResult) {
        self.phase = Phase::Success;
        self.result = Some(result);
    }

    pub fn analysis_failed(&mut self, message: String) {
        self.phase = Phase::Error;
        self.result = None;
        self.error = Some(message);
    }

    /// Manual reset from the Error card back to Idle; the image stays
    /// so the user can retry without re-uploading
    pub fn retry(&mut self) {
        if self.phase == Phase::Error {
            self.phase = Phase::Idle;
            self.error = None;
        }
    }
}
