use crate::error::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

/// How a file ended up at its destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Linked,
    Copied,
}

/// Options shared by every placement in one operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaceOptions {
    /// Skip the symlink attempt and always copy
    pub copy: bool,
    /// 0 = silent, 1+ = one console line per file
    pub verbosity: u8,
}

impl PlaceOptions {
    pub fn new(copy: bool, verbosity: u8) -> Self {
        Self { copy, verbosity }
    }
}

/// Places `source` at `destination` as a symlink, falling back to a copy.
///
/// The symlink points at the canonical form of `source`. Any link failure is
/// recovered by copying; a copy failure is returned as [`LayoutError::Copy`].
/// The destination is never overwritten, so placing twice at the same path
/// fails the second time.
pub fn place(source: &Path, destination: &Path, options: PlaceOptions) -> LayoutResult<Placement> {
    if !options.copy {
        match link(source, destination) {
            Ok(()) => {
                if options.verbosity >= 1 {
                    println!("link created: {}", destination.display());
                }
                tracing::trace!("Linked {:?} -> {:?}", destination, source);
                return Ok(Placement::Linked);
            }
            Err(e) => {
                tracing::debug!("{}; falling back to copy", e);
            }
        }
    }

    let bytes = copy_file(source, destination)?;
    if options.verbosity >= 1 {
        println!("copy created: {}", destination.display());
    }
    tracing::trace!("Copied {} bytes {:?} -> {:?}", bytes, source, destination);
    Ok(Placement::Copied)
}

fn link(source: &Path, destination: &Path) -> LayoutResult<()> {
    let link_error = |target: &Path, e: io::Error| LayoutError::LinkCreation {
        target: target.to_path_buf(),
        destination: destination.to_path_buf(),
        source: e,
    };

    let target = fs::canonicalize(source).map_err(|e| link_error(source, e))?;
    create_symlink(&target, destination).map_err(|e| link_error(&target, e))
}

#[cfg(unix)]
fn create_symlink(target: &Path, destination: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, destination)
}

#[cfg(windows)]
fn create_symlink(target: &Path, destination: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, destination)
}

#[cfg(not(any(unix, windows)))]
fn create_symlink(_target: &Path, _destination: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symbolic links are not supported on this platform",
    ))
}

/// Byte copy that refuses to replace an existing destination
fn copy_file(source: &Path, destination: &Path) -> LayoutResult<u64> {
    let copy_error = |e: io::Error| LayoutError::Copy {
        source_path: source.to_path_buf(),
        destination: destination.to_path_buf(),
        source: e,
    };

    let mut reader = File::open(source).map_err(copy_error)?;
    let mut writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(destination)
        .map_err(copy_error)?;
    io::copy(&mut reader, &mut writer).map_err(copy_error)
}
