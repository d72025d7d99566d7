use agriscan_common::{AgriScanError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageFile {
    pub path: PathBuf,
    pub file_name: String,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS
        .iter()
        .any(|e| e.eq_ignore_ascii_case(ext))
}

fn image_file(path: &Path) -> ImageFile {
    ImageFile {
        path: path.to_path_buf(),
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default(),
    }
}

/// Collect the images to diagnose from a file or folder path
///
/// A single file must carry an image extension; anything else is rejected
/// up front rather than sent to the model. A folder is scanned one level
/// deep and the matches are sorted by file name.
pub fn collect_images(path: &Path) -> Result<Vec<ImageFile>> {
    if !path.exists() {
        return Err(AgriScanError::NotFound(path.display().to_string()));
    }

    if path.is_file() {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();
        if !is_image_extension(&ext) {
            return Err(AgriScanError::InvalidImage(format!(
                "unsupported file type: {}",
                path.display()
            )));
        }
        return Ok(vec![image_file(path)]);
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(path)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let entry_path = entry.path();

        if !entry_path.is_file() {
            continue;
        }

        if let Some(ext) = entry_path.extension() {
            if is_image_extension(&ext.to_string_lossy()) {
                images.push(image_file(entry_path));
            }
        }
    }

    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(images)
}
