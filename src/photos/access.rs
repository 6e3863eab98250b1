/// Photo folder access
///
/// The desktop stand-in for a media-library permission prompt: a review
/// session can only start once the photos folder exists and is readable.
/// When access is denied the user fixes it outside the app, either by
/// opening the folder location in the system file manager or by picking
/// a different folder, and the check runs again.

use std::path::{Path, PathBuf};
use tokio::task;

/// Outcome of the access check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStatus {
    Granted,
    Denied,
}

/// Check whether the photos folder can be read.
/// `None` means no folder is configured and no system Pictures folder exists.
pub async fn request_photo_access(folder: Option<PathBuf>) -> AccessStatus {
    task::spawn_blocking(move || check_access_blocking(folder.as_deref()))
        .await
        .unwrap_or(AccessStatus::Denied)
}

/// Blocking implementation of the access check
fn check_access_blocking(folder: Option<&Path>) -> AccessStatus {
    let Some(folder) = folder else {
        println!("🔒 No photos folder available");
        return AccessStatus::Denied;
    };

    match std::fs::read_dir(folder) {
        Ok(_) => {
            println!("🔓 Photo access granted: {}", folder.display());
            AccessStatus::Granted
        }
        Err(e) => {
            println!("🔒 Photo access denied for {}: {}", folder.display(), e);
            AccessStatus::Denied
        }
    }
}

/// Open the photos folder location (or the user's home folder) in the
/// system file manager, so access problems can be fixed externally.
pub fn open_system_settings(folder: Option<&Path>) {
    let target = folder
        .map(Path::to_path_buf)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("/"));

    if let Err(e) = open::that(&target) {
        eprintln!("⚠️  Failed to open {}: {}", target.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readable_folder_is_granted() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(
            check_access_blocking(Some(dir.path())),
            AccessStatus::Granted
        );
    }

    #[test]
    fn test_missing_folder_is_denied() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        assert_eq!(
            check_access_blocking(Some(&missing)),
            AccessStatus::Denied
        );
    }

    #[test]
    fn test_unconfigured_folder_is_denied() {
        assert_eq!(check_access_blocking(None), AccessStatus::Denied);
    }
}
