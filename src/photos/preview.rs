/// Display preview generation
///
/// Camera originals can be tens of megapixels and decode slowly. Before a
/// photo is presented, the reviewer prepares a bounded-size JPEG in the
/// cache directory and displays that instead. Photos already small enough
/// are displayed straight from their original file.

use image::imageops::FilterType;
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use tokio::task;

use crate::state::data::PhotoEntry;

/// Longest edge of a generated preview, in pixels
const PREVIEW_MAX_DIM: u32 = 1600;

/// Get the preview cache directory
/// Returns ~/.cache/photo-sweep/previews on Linux
pub fn get_preview_cache_dir() -> PathBuf {
    let mut path = dirs_next::cache_dir()
        .or_else(|| dirs_next::home_dir())
        .expect("Could not determine cache directory");

    path.push("photo-sweep");
    path.push("previews");

    // Ensure the directory exists
    fs::create_dir_all(&path).expect("Failed to create preview cache directory");

    path
}

/// Cache file name for an entry id (ids are full paths, so hash them)
fn preview_file_name(id: &str) -> String {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    format!("{:016x}.jpg", hasher.finish())
}

/// The cache path a preview for `id` would live at (doesn't generate)
pub fn preview_path_in(cache_dir: &Path, id: &str) -> PathBuf {
    cache_dir.join(preview_file_name(id))
}

/// Ensure a displayable preview exists for `entry`.
///
/// # Returns
/// * `Ok((id, path))` - The entry id and the path to display
/// * `Err(String)` - Error message if the photo cannot be decoded
pub async fn ensure_preview(
    entry: PhotoEntry,
    cache_dir: PathBuf,
) -> Result<(String, PathBuf), String> {
    // Spawn blocking task for CPU-bound decode and resize work
    task::spawn_blocking(move || ensure_preview_blocking(&entry, &cache_dir))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

/// Blocking version of preview generation
fn ensure_preview_blocking(
    entry: &PhotoEntry,
    cache_dir: &Path,
) -> Result<(String, PathBuf), String> {
    let preview_path = preview_path_in(cache_dir, &entry.id);

    // Already cached from an earlier session over the same folder
    if preview_path.exists() {
        return Ok((entry.id.clone(), preview_path));
    }

    let img = image::open(&entry.path)
        .map_err(|e| format!("Failed to decode {}: {}", entry.filename, e))?;

    // Small enough to display directly, no cache entry needed
    if img.width() <= PREVIEW_MAX_DIM && img.height() <= PREVIEW_MAX_DIM {
        return Ok((entry.id.clone(), entry.path.clone()));
    }

    let resized = img.resize(PREVIEW_MAX_DIM, PREVIEW_MAX_DIM, FilterType::Lanczos3);

    // JPEG has no alpha channel, so flatten before saving
    resized
        .to_rgb8()
        .save(&preview_path)
        .map_err(|e| format!("Failed to save preview: {}", e))?;

    println!("📸 Generated preview: {}", preview_path.display());

    Ok((entry.id.clone(), preview_path))
}

/// Drop the cached preview for an entry, if one exists.
/// Called after the photo itself is deleted so the cache never outlives it.
pub fn remove_preview(cache_dir: &Path, id: &str) {
    let preview_path = preview_path_in(cache_dir, id);
    if preview_path.exists() {
        if let Err(e) = fs::remove_file(&preview_path) {
            eprintln!("⚠️  Failed to remove preview {}: {}", preview_path.display(), e);
        }
    }
}
