//! Emergency rollback
//!
//! Shared by guarded directory creation, the operation guards and
//! [`Transaction`](super::Transaction)'s `Drop`. Only acts when the log still
//! holds entries, so repeated invocation is harmless.

use super::log::TransactionLog;

/// Why an emergency rollback ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollbackReason {
    /// Guarded creation hit a directory that already existed
    ExistingDirectory,
    /// Any other failure inside an operation
    UnexpectedError,
    /// The owning context went away without a commit
    Uncommitted,
}

impl RollbackReason {
    /// Warning line written to stderr
    pub fn message(&self) -> &'static str {
        match self {
            Self::ExistingDirectory => {
                "Existing directory detected; the directory layout has been reset."
            }
            Self::UnexpectedError => {
                "An unexpected error occurred; the directory layout has been reset."
            }
            Self::Uncommitted => {
                "Directory layout was never committed; it has been reset."
            }
        }
    }
}

/// Rolls back `log` if it is non-empty and warns on stderr.
///
/// Returns the number of log entries that were discarded.
pub(crate) fn emergency_rollback(log: &mut TransactionLog, reason: RollbackReason) -> usize {
    if log.is_empty() {
        return 0;
    }

    let discarded = log.len();
    let removed = log.rollback();
    tracing::warn!(
        ?reason,
        discarded,
        removed,
        "Emergency rollback of directory layout"
    );
    eprintln!("{}", reason.message());
    discarded
}
