/// UI widgets module
///
/// This module provides the interactive pieces layered over the iced
/// views:
/// - `viewer.rs` - swipe gesture recognition over the presented photo

pub mod viewer;
