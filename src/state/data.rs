/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the photo layer and the UI layer.

use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Represents a single photo under review
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoEntry {
    /// Stable identifier, unique within one loading session
    /// (the photo's full path as a string)
    pub id: String,
    /// Filename only (e.g., "IMG_0412.jpg")
    pub filename: String,
    /// Full path to the photo file
    pub path: PathBuf,
    /// Last-modified timestamp, used to order the batch newest first
    pub modified: DateTime<Utc>,
}
