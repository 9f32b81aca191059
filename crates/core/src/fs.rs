//! Filesystem utilities

use std::path::Path;

use log::debug;

/// Check if a path exists
pub fn path_exists(path: &str) -> bool {
    Path::new(path).exists()
}

/// Check if a path exists and is a regular file
///
/// The dataset is opened read-only, so a missing file is reported instead of
/// letting the database driver create an empty one.
pub fn is_file(path: &str) -> bool {
    let found = Path::new(path).is_file();
    if !found {
        debug!("No regular file at: {}", path);
    }
    found
}
