//! Transactional directory construction
//!
//! A [`Transaction`] creates directories one level at a time and remembers
//! each one. Until [`Transaction::commit`] is called the whole tree is
//! provisional: a conflict, an I/O failure, an error returned through
//! [`Transaction::guard`], or dropping the transaction uncommitted removes
//! every directory it created.
//!
//! ```no_run
//! use classdir::transaction::Transaction;
//! use std::path::Path;
//!
//! let mut tx = Transaction::new();
//! tx.create_dir(Path::new("/data/out"))?;
//! tx.create_dir(Path::new("/data/out/cat"))?;
//! tx.commit();
//! # Ok::<(), classdir::LayoutError>(())
//! ```

pub mod hook;
pub mod log;

pub use hook::RollbackReason;
pub use log::TransactionLog;

use crate::error::{LayoutError, LayoutResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Owner of one provisional directory tree
///
/// Operations borrow it mutably, so two operations can never interleave on
/// the same log. Dropping it with uncommitted entries performs an emergency
/// rollback.
#[derive(Debug, Default)]
pub struct Transaction {
    log: TransactionLog,
}

impl Transaction {
    pub fn new() -> Self {
        Self {
            log: TransactionLog::new(),
        }
    }

    /// Creates exactly one directory level at `path`.
    ///
    /// The parent must already exist. On success the canonical path is
    /// recorded. On failure everything recorded so far is rolled back before
    /// the error is returned.
    pub fn create_dir(&mut self, path: &Path) -> LayoutResult<()> {
        match fs::create_dir(path) {
            Ok(()) => {
                let canonical = canonical_path(path);
                tracing::debug!("Created directory: {:?}", canonical);
                self.log.record(canonical);
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                self.abort(RollbackReason::ExistingDirectory);
                Err(LayoutError::DirectoryConflict {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => {
                self.abort(RollbackReason::UnexpectedError);
                Err(LayoutError::DirectoryCreation {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        }
    }

    /// Runs `op`, rolling back on failure and returning the same error.
    pub fn guard<T, F>(&mut self, op: F) -> LayoutResult<T>
    where
        F: FnOnce(&mut Self) -> LayoutResult<T>,
    {
        let result = op(self);
        if let Err(e) = &result {
            tracing::debug!("Operation failed, rolling back: {}", e);
            self.abort(RollbackReason::UnexpectedError);
        }
        result
    }

    /// Makes the current tree permanent and clears the log.
    ///
    /// Returns the directories that were committed, in creation order.
    pub fn commit(&mut self) -> Vec<PathBuf> {
        let committed = self.log.commit();
        tracing::info!("Committed {} directories", committed.len());
        committed
    }

    /// Removes every directory created since the last commit.
    ///
    /// Returns how many recorded directories were actually removed.
    pub fn rollback(&mut self) -> usize {
        if self.log.is_empty() {
            return 0;
        }
        let removed = self.log.rollback();
        tracing::info!("Rolled back {} directories", removed);
        removed
    }

    /// Directories created since the last commit or rollback
    pub fn created(&self) -> &[PathBuf] {
        self.log.entries()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    fn abort(&mut self, reason: RollbackReason) -> usize {
        hook::emergency_rollback(&mut self.log, reason)
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        self.abort(RollbackReason::Uncommitted);
    }
}

fn canonical_path(path: &Path) -> PathBuf {
    fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
