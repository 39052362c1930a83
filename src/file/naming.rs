use std::path::{Path, PathBuf};

/// Default output directory name when no base directory is given
pub const DEFAULT_BASENAME: &str = "split_data";

/// Default separator between source names in a merged directory name
pub const DEFAULT_SEPARATOR: &str = "-";

/// Resolves the root of a new output tree.
///
/// An explicit base directory wins unchanged. Otherwise the result is a
/// sibling of `original_dir` named `basename`.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use classdir::file::naming::resolve_base_dir;
///
/// let base = resolve_base_dir(Path::new("/data/images"), None, "split_data");
/// assert_eq!(base, PathBuf::from("/data/split_data"));
///
/// let base = resolve_base_dir(Path::new("/data/images"), Some(Path::new("/out")), "split_data");
/// assert_eq!(base, PathBuf::from("/out"));
/// ```
pub fn resolve_base_dir(original_dir: &Path, base_dir: Option<&Path>, basename: &str) -> PathBuf {
    match base_dir {
        Some(explicit) => explicit.to_path_buf(),
        None => original_dir
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(basename),
    }
}

/// Joins the final path component of every source with `separator`.
///
/// `["/d/a", "/d/b"]` with `"-"` becomes `"a-b"`.
pub fn joined_basename<P: AsRef<Path>>(sources: &[P], separator: &str) -> String {
    sources
        .iter()
        .map(|p| {
            p.as_ref()
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join(separator)
}
