//! Ordered record of directories created by a transaction

use std::fs;
use std::path::{Path, PathBuf};

/// Directories created since the last commit or rollback, in creation order.
///
/// A path appears at most once. The log indexes the filesystem but does not
/// own the files beneath a recorded directory; rollback removes the whole
/// subtree regardless of what was placed inside it.
#[derive(Debug, Default)]
pub struct TransactionLog {
    created: Vec<PathBuf>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self {
            created: Vec::new(),
        }
    }

    /// Records a successfully created directory
    pub fn record(&mut self, path: PathBuf) {
        if !self.contains(&path) {
            self.created.push(path);
        }
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.created.iter().any(|p| p == path)
    }

    /// Returns recorded directories in creation order
    pub fn entries(&self) -> &[PathBuf] {
        &self.created
    }

    pub fn len(&self) -> usize {
        self.created.len()
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
    }

    /// Forgets every entry without touching the filesystem.
    ///
    /// Returns the entries that became permanent.
    pub fn commit(&mut self) -> Vec<PathBuf> {
        std::mem::take(&mut self.created)
    }

    /// Deletes every recorded directory, most recent first, then clears the log.
    ///
    /// Deletion errors are swallowed so that one missing or half-removed
    /// subtree never blocks the remaining entries. Returns the number of
    /// entries that were still present and got removed.
    pub fn rollback(&mut self) -> usize {
        let mut removed = 0;
        for path in self.created.iter().rev() {
            match fs::remove_dir_all(path) {
                Ok(()) => {
                    removed += 1;
                    tracing::debug!("Rolled back directory: {:?}", path);
                }
                Err(e) => {
                    // Usually already gone with an ancestor removed earlier in this loop
                    tracing::trace!("Skipped rollback of {:?}: {}", path, e);
                }
            }
        }
        self.created.clear();
        removed
    }
}
