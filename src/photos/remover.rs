/// Photo deletion capability
///
/// The one destructive operation in the app. A delete decision hands the
/// presented entry to `remove_photo`, which settles with an explicit
/// result: the entry id on success, a typed error on failure. The review
/// session only marks the photo decided once the deletion has settled
/// successfully; on failure the same photo stays presented for retry.

use std::fs;
use thiserror::Error;
use tokio::task;

use crate::photos::preview;
use crate::state::data::PhotoEntry;

/// Errors from the deletion capability
///
/// Clone because the result travels inside application messages.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RemoveError {
    #[error("{0} no longer exists on disk")]
    NotFound(String),
    #[error("could not delete {filename}: {message}")]
    Io { filename: String, message: String },
    #[error("task join error: {0}")]
    Join(String),
}

/// Delete the photo file from disk.
///
/// # Returns
/// * `Ok(id)` - The deleted entry's id, for marking it decided
/// * `Err(RemoveError)` - The photo was not deleted and remains reviewable
pub async fn remove_photo(entry: PhotoEntry) -> Result<String, RemoveError> {
    // Spawn blocking because file removal hits the disk
    task::spawn_blocking(move || remove_photo_blocking(&entry))
        .await
        .map_err(|e| RemoveError::Join(e.to_string()))?
}

/// Blocking implementation of photo deletion
fn remove_photo_blocking(entry: &PhotoEntry) -> Result<String, RemoveError> {
    if !entry.path.exists() {
        return Err(RemoveError::NotFound(entry.filename.clone()));
    }

    fs::remove_file(&entry.path).map_err(|e| RemoveError::Io {
        filename: entry.filename.clone(),
        message: e.to_string(),
    })?;

    // The cached preview must not outlive its photo
    preview::remove_preview(&preview::get_preview_cache_dir(), &entry.id);

    println!("🗑️  Deleted {}", entry.filename);

    Ok(entry.id.clone())
}
