//! File access checks, file operations and modification times.
//!
//! Failures here are plain IO errors. They are not script errors, so a
//! failed file operation aborts the script as a bug would.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::Result;

/// Mode used by [`create_folder`].
pub const DEFAULT_FOLDER_MODE: u32 = 0o777;

/// Kind of access to check for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Exists,
    Read,
    Write,
    Execute,
}

/// Check if a file exists. A file that exists is not necessarily readable.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    check_access(path.as_ref(), Access::Exists)
}

/// Check if a file exists and is readable.
pub fn is_file_readable(path: impl AsRef<Path>) -> bool {
    check_access(path.as_ref(), Access::Read)
}

/// Check if a file exists and is writeable.
pub fn is_file_writeable(path: impl AsRef<Path>) -> bool {
    check_access(path.as_ref(), Access::Write)
}

/// Check if a file exists and is executable.
pub fn is_file_executable(path: impl AsRef<Path>) -> bool {
    check_access(path.as_ref(), Access::Execute)
}

/// Check `access` for `path` as the current user.
#[cfg(unix)]
pub fn check_access(path: &Path, access: Access) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let mode = match access {
        Access::Exists => libc::F_OK,
        Access::Read => libc::R_OK,
        Access::Write => libc::W_OK,
        Access::Execute => libc::X_OK,
    };

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };

    // SAFETY: c_path is a valid NUL-terminated string that outlives the call
    unsafe { libc::access(c_path.as_ptr(), mode) == 0 }
}

/// Check `access` for `path` as the current user.
#[cfg(not(unix))]
pub fn check_access(path: &Path, access: Access) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };

    match access {
        Access::Exists | Access::Read => true,
        Access::Write => !metadata.permissions().readonly(),
        Access::Execute => path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| matches!(ext.to_lowercase().as_str(), "exe" | "bat" | "cmd" | "com"))
            .unwrap_or(false),
    }
}

/// Create a folder and any missing parents with mode `0o777`.
///
/// Succeeds if the folder already exists; fails if the path exists and is
/// not a folder.
pub fn create_folder(path: impl AsRef<Path>) -> Result<()> {
    create_folder_with_mode(path, DEFAULT_FOLDER_MODE)
}

/// Create a folder and any missing parents with the given permissions.
///
/// The mode is ignored on platforms without Unix permissions.
pub fn create_folder_with_mode(path: impl AsRef<Path>, mode: u32) -> Result<()> {
    let path = path.as_ref();
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    debug!(path = %path.display(), mode = %format!("{:o}", mode), "Creating folder");
    builder.create(path)?;
    Ok(())
}

/// Copy a file, overwriting the destination.
pub fn copy_file(from: impl AsRef<Path>, to: impl AsRef<Path>) -> Result<()> {
    let (from, to) = (from.as_ref(), to.as_ref());
    debug!(from = %from.display(), to = %to.display(), "Copying file");
    fs::copy(from, to)?;
    Ok(())
}

/// Rename a file or folder. Fails if `to` is a non-empty folder.
pub fn rename(from: impl AsRef<Path>, to: impl AsRef<Path>) -> Result<()> {
    let (from, to) = (from.as_ref(), to.as_ref());
    debug!(from = %from.display(), to = %to.display(), "Renaming");
    fs::rename(from, to)?;
    Ok(())
}

/// Delete a file.
pub fn delete_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Deleting file");
    fs::remove_file(path)?;
    Ok(())
}

/// Delete an empty folder.
pub fn delete_folder(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Deleting folder");
    fs::remove_dir(path)?;
    Ok(())
}

/// Unix timestamp of the last modification of a file or folder.
///
/// A folder's own time may be older than the files it contains; see
/// [`recursive_modification_time`].
pub fn modification_time(path: impl AsRef<Path>) -> Result<i64> {
    let modified = fs::metadata(path.as_ref())?.modified()?;
    Ok(unix_seconds(modified))
}

/// Unix timestamp of the newest file at or beneath `path`.
///
/// For a file this equals [`modification_time`]. For a folder, every regular
/// file beneath it is considered and symlinks are skipped. A folder with no
/// files reports its own time.
pub fn recursive_modification_time(path: impl AsRef<Path>) -> Result<i64> {
    let path = path.as_ref();
    let metadata = fs::metadata(path)?;

    if !metadata.is_dir() {
        return Ok(unix_seconds(metadata.modified()?));
    }

    match newest_file_time(path)? {
        Some(newest) => Ok(unix_seconds(newest)),
        None => Ok(unix_seconds(metadata.modified()?)),
    }
}

/// Check if `a` was modified more recently than `b`.
///
/// Uses [`recursive_modification_time`], so `is_newer_than("src", "bin")`
/// answers whether a build output is stale.
pub fn is_newer_than(a: impl AsRef<Path>, b: impl AsRef<Path>) -> Result<bool> {
    Ok(recursive_modification_time(a)? > recursive_modification_time(b)?)
}

/// Check if the path is a folder.
pub fn is_folder(path: impl AsRef<Path>) -> Result<bool> {
    Ok(fs::metadata(path.as_ref())?.is_dir())
}

fn newest_file_time(dir: &Path) -> Result<Option<SystemTime>> {
    let mut newest: Option<SystemTime> = None;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;

        let candidate = if file_type.is_dir() {
            newest_file_time(&entry.path())?
        } else if file_type.is_file() {
            Some(entry.metadata()?.modified()?)
        } else {
            None
        };

        newest = newest.max(candidate);
    }

    Ok(newest)
}

fn unix_seconds(time: SystemTime) -> i64 {
    DateTime::<Utc>::from(time).timestamp()
}
