#![allow(dead_code)]

use classdir::PlaceOptions;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

// Initialize logging once for all tests
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Create `<root>/<name>/<class>/<class>_<i>.jpg` for every `(class, count)`.
///
/// Each file holds its own relative path so copies can be told apart.
pub fn create_dataset(root: &Path, name: &str, classes: &[(&str, usize)]) -> PathBuf {
    let dataset = root.join(name);
    for (class, count) in classes {
        let class_dir = dataset.join(class);
        fs::create_dir_all(&class_dir).unwrap();
        for i in 0..*count {
            let file_name = format!("{}_{:03}.jpg", class, i);
            fs::write(class_dir.join(&file_name), format!("{}/{}", class, file_name)).unwrap();
        }
    }
    dataset
}

/// Placement options that keep test output quiet
pub fn quiet() -> PlaceOptions {
    PlaceOptions::new(false, 0)
}

pub fn quiet_copy() -> PlaceOptions {
    PlaceOptions::new(true, 0)
}

/// File names directly under `dir`
pub fn names_in(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

/// Every path under `root`, relative to it (symlinks are not followed)
pub fn tree(root: &Path) -> BTreeSet<PathBuf> {
    let mut out = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let entry = entry.unwrap();
            let path = entry.path();
            out.insert(path.strip_prefix(root).unwrap().to_path_buf());
            if entry.file_type().unwrap().is_dir() {
                stack.push(path);
            }
        }
    }
    out
}

pub fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
}

/// Add an entry that lists as a file but cannot be read (unix only)
#[cfg(unix)]
pub fn add_dangling_link(class_dir: &Path, name: &str) {
    std::os::unix::fs::symlink(class_dir.join("does-not-exist"), class_dir.join(name)).unwrap();
}
