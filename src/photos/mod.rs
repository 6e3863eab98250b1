/// Photo library module
///
/// This module handles:
/// - Checking access to the photos folder
/// - Enumerating reviewable photos
/// - Generating bounded-size display previews
/// - Caching previews to disk
/// - Deleting photos the user swiped away

pub mod access;
pub mod scanner;
pub mod preview;
pub mod remover;
