/// Photo folder scanner
///
/// This module enumerates the photos a review session pages through.
/// It walks the configured folder recursively, keeps files with a known
/// photo extension, orders them newest first and caps the batch at the
/// configured limit.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::task;
use walkdir::WalkDir;

use crate::state::data::PhotoEntry;

/// Supported photo file extensions (formats the display pipeline decodes)
const PHOTO_EXTENSIONS: [&str; 8] = [
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "tif", "tiff",
];

/// Enumerate reviewable photos under `folder`, newest first, at most `limit`.
///
/// # Arguments
/// * `folder` - Folder to scan recursively
/// * `limit` - Maximum number of entries to return
///
/// # Returns
/// * `Ok(entries)` - The batch to review, possibly empty
/// * `Err(String)` - Error message if the folder cannot be scanned
pub async fn list_photos(folder: PathBuf, limit: usize) -> Result<Vec<PhotoEntry>, String> {
    // Spawn blocking because the walk is IO-bound
    task::spawn_blocking(move || list_photos_blocking(&folder, limit))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

/// Blocking implementation of the folder scan
fn list_photos_blocking(folder: &Path, limit: usize) -> Result<Vec<PhotoEntry>, String> {
    if !folder.is_dir() {
        return Err(format!("Not a folder: {}", folder.display()));
    }

    println!("🔍 Scanning folder: {}", folder.display());

    let mut entries = Vec::new();

    // Walk the directory tree recursively
    for entry in WalkDir::new(folder)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        // Only process files (not directories)
        if !path.is_file() {
            continue;
        }

        // Check if this is a photo by extension
        if let Some(extension) = path.extension() {
            let ext = extension.to_string_lossy().to_lowercase();
            if !PHOTO_EXTENSIONS.contains(&ext.as_str()) {
                continue;
            }
        } else {
            continue;
        }

        // Files with unreadable metadata sort to the end of the batch
        let modified = entry
            .metadata()
            .ok()
            .and_then(|m| m.modified().ok())
            .map(DateTime::<Utc>::from)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

        let id = path.to_string_lossy().to_string();
        let filename = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        entries.push(PhotoEntry {
            id,
            filename,
            path: path.to_path_buf(),
            modified,
        });

        if entries.len() % 100 == 0 {
            println!("⏳ Found {} photos...", entries.len());
        }
    }

    // Newest first, then cap the batch
    entries.sort_by(|a, b| b.modified.cmp(&a.modified));
    entries.truncate(limit);

    println!("✅ Scan complete: {} photos queued for review", entries.len());

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;
    use std::time::Duration;

    fn touch(path: &Path) {
        fs::write(path, b"test").unwrap();
    }

    #[test]
    fn test_filters_by_extension_and_recurses() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.jpg"));
        touch(&dir.path().join("notes.txt"));
        touch(&dir.path().join("no_extension"));

        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        touch(&nested.join("b.PNG"));

        let entries = list_photos_blocking(dir.path(), 100).unwrap();

        let mut names: Vec<&str> = entries.iter().map(|e| e.filename.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["a.jpg", "b.PNG"]);
    }

    #[test]
    fn test_orders_newest_first_and_truncates() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("old.jpg"));
        // Separate the modification timestamps
        thread::sleep(Duration::from_millis(150));
        touch(&dir.path().join("mid.jpg"));
        thread::sleep(Duration::from_millis(150));
        touch(&dir.path().join("new.jpg"));

        let entries = list_photos_blocking(dir.path(), 2).unwrap();

        let names: Vec<&str> = entries.iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(names, vec!["new.jpg", "mid.jpg"]);
    }

    #[test]
    fn test_entry_id_is_unique_path() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.jpg"));

        let entries = list_photos_blocking(dir.path(), 100).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, entries[0].path.to_string_lossy());
    }

    #[test]
    fn test_missing_folder_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        assert!(list_photos_blocking(&missing, 100).is_err());
    }

    #[test]
    fn test_empty_folder_yields_empty_batch() {
        let dir = tempfile::tempdir().unwrap();

        let entries = list_photos_blocking(dir.path(), 100).unwrap();
        assert!(entries.is_empty());
    }
}
