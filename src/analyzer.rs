//! Native Gemini client
//!
//! One request per image: inline JPEG bytes + the fixed instruction text,
//! constrained to the declared response schema. No retries, no caching.

use agriscan_common::{
    generate_content_url, parse_analysis_response, AgriScanError, AnalysisResult,
    GenerateContentRequest, GenerateContentResponse, Result,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::imageops::FilterType;
use image::ImageFormat;
use std::io::Cursor;
use std::path::Path;

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    /// Diagnose a single image file
    pub async fn analyze_file(
        &self,
        path: &Path,
        max_size: u32,
        verbose: bool,
    ) -> Result<AnalysisResult> {
        let payload = encode_image(path, max_size)?;
        if verbose {
            println!("  payload: {} base64 chars", payload.len());
        }
        self.analyze_base64(&payload, "image/jpeg").await
    }

    /// Diagnose an already-encoded image payload
    pub async fn analyze_base64(
        &self,
        base64_data: &str,
        mime_type: &str,
    ) -> Result<AnalysisResult> {
        let request = GenerateContentRequest::for_image(base64_data, mime_type);
        let url = format!(
            "{}?key={}",
            generate_content_url(&self.model),
            self.api_key
        );

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AgriScanError::Api(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AgriScanError::Api(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AgriScanError::Api(e.to_string()))?;

        let text = payload.text().ok_or(AgriScanError::EmptyResponse)?;

        parse_analysis_response(text)
    }
}

/// Load an image, downscale it to fit `max_size`, and base64 a JPEG
/// re-encoding of it
pub fn encode_image(path: &Path, max_size: u32) -> Result<String> {
    let img = image::open(path)
        .map_err(|e| AgriScanError::InvalidImage(format!("{}: {}", path.display(), e)))?;

    let img = if img.width().max(img.height()) > max_size {
        img.resize(max_size, max_size, FilterType::Lanczos3)
    } else {
        img
    };

    // JPEG has no alpha channel
    let img = image::DynamicImage::ImageRgb8(img.to_rgb8());

    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Jpeg)
        .map_err(|e| AgriScanError::InvalidImage(format!("{}: {}", path.display(), e)))?;

    Ok(BASE64.encode(&buf))
}
