//! Support for library configuration options

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

use crate::layout::Layout;

/// Where [`JsonFileStore::at_default_path`](crate::store::JsonFileStore::at_default_path) keeps its board.
/// Feel free to override it when initing this library.
pub static STORAGE_PATH: Lazy<Arc<Mutex<PathBuf>>> = Lazy::new(|| Arc::new(Mutex::new(PathBuf::from("task-board.json"))));

/// The layout of boards created by [`TaskBoard::open_default`](crate::TaskBoard::open_default) when nothing has been saved yet.
/// Feel free to override it when initing this library.
pub static DEFAULT_LAYOUT: Lazy<Arc<Mutex<Layout>>> = Lazy::new(|| Arc::new(Mutex::new(Layout::kanban())));

/// The current value of [`STORAGE_PATH`]
pub fn storage_path() -> PathBuf {
    // A panic while holding the lock cannot leave a PathBuf half-written
    STORAGE_PATH.lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// The current value of [`DEFAULT_LAYOUT`]
pub fn default_layout() -> Layout {
    DEFAULT_LAYOUT.lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}
