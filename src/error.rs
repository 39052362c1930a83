use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building an output layout
#[derive(Error, Debug)]
pub enum LayoutError {
    /// Target directory already exists
    #[error("Directory already exists: {}", path.display())]
    DirectoryConflict { path: PathBuf },

    /// Any other failure creating a directory
    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Symlink creation failed. Recovered by copying inside the link strategy.
    #[error("Failed to link {} -> {}: {source}", destination.display(), target.display())]
    LinkCreation {
        target: PathBuf,
        destination: PathBuf,
        source: std::io::Error,
    },

    /// Copy fallback failed
    #[error("Failed to copy {} to {}: {source}", source_path.display(), destination.display())]
    Copy {
        source_path: PathBuf,
        destination: PathBuf,
        source: std::io::Error,
    },

    /// Source directory missing or unreadable
    #[error("Failed to list {}: {source}", path.display())]
    Listing {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Source path exists but is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Rejected before any filesystem work
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Category tag for [`LayoutError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DirectoryConflict,
    DirectoryCreation,
    LinkCreation,
    Copy,
    Listing,
    NotADirectory,
    InvalidArgument,
}

/// Result type for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;

impl LayoutError {
    /// Create an invalid argument error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a listing error for `path`
    pub fn listing(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Listing {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DirectoryConflict { .. } => ErrorKind::DirectoryConflict,
            Self::DirectoryCreation { .. } => ErrorKind::DirectoryCreation,
            Self::LinkCreation { .. } => ErrorKind::LinkCreation,
            Self::Copy { .. } => ErrorKind::Copy,
            Self::Listing { .. } => ErrorKind::Listing,
            Self::NotADirectory(_) => ErrorKind::NotADirectory,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }

    /// Whether the error was raised before touching the filesystem
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_conflict_message_contains_path() {
        let err = LayoutError::DirectoryConflict {
            path: PathBuf::from("/data/split_data"),
        };
        assert!(err.to_string().contains("/data/split_data"));
        assert_eq!(err.kind(), ErrorKind::DirectoryConflict);
    }

    #[test]
    fn test_copy_error_carries_both_paths() {
        let err = LayoutError::Copy {
            source_path: PathBuf::from("/in/a.jpg"),
            destination: PathBuf::from("/out/a.jpg"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/in/a.jpg"));
        assert!(msg.contains("/out/a.jpg"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_listing_constructor() {
        let err = LayoutError::listing("/missing", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.kind(), ErrorKind::Listing);
        assert!(!err.is_validation());
    }

    #[test]
    fn test_invalid_is_validation() {
        let err = LayoutError::invalid("n_splits must be at least 1");
        assert!(err.is_validation());
        assert!(err.to_string().contains("n_splits"));
    }
}
