//! Dataset tree enumeration
//!
//! Listings are sorted by name so that a seeded shuffle reproduces the same
//! assignment regardless of the order `read_dir` yields entries in.

use crate::error::{LayoutError, LayoutResult};
use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// Class directory names directly under `root`. Non-directory entries are ignored.
pub fn list_classes(root: &Path) -> LayoutResult<Vec<OsString>> {
    list_entries(root, |path| path.is_dir())
}

/// Data file names directly under a class directory. Subdirectories are ignored.
pub fn list_files(class_dir: &Path) -> LayoutResult<Vec<OsString>> {
    list_entries(class_dir, |path| !path.is_dir())
}

fn list_entries(dir: &Path, keep: impl Fn(&Path) -> bool) -> LayoutResult<Vec<OsString>> {
    if dir.exists() && !dir.is_dir() {
        return Err(LayoutError::NotADirectory(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|e| LayoutError::listing(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LayoutError::listing(dir, e))?;
        if keep(&entry.path()) {
            names.push(entry.file_name());
        }
    }
    names.sort();
    Ok(names)
}
