//! Filesystem helpers built on `cap-std` and `camino`.
//!
//! The profile store writes its slot with plain `std::fs`, but directory
//! creation goes through capability-based handles so an absolute slot path
//! never grants more ambient authority than its own parent directory.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io;
use std::path::Component;

/// Ensure the parent directory for `path` exists.
///
/// A bare file name, an empty parent, or the filesystem root are treated as
/// already present. Missing intermediate directories are created.
///
/// # Errors
/// Returns the underlying I/O error when the base directory cannot be opened
/// or the missing directories cannot be created.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }

    let (base_dir, suffix) = ambient_base_and_suffix(parent)?;
    if suffix.as_os_str().is_empty() {
        return Ok(());
    }
    base_dir.create_dir_all(&suffix)?;
    Ok(())
}

/// Split a parent path into an ambient base directory handle and the suffix
/// to create beneath it.
///
/// Absolute paths anchor at the root (or drive prefix on Windows); relative
/// paths anchor at the current directory.
///
/// # Errors
/// Returns an I/O error when the base directory cannot be opened or the path
/// is not valid UTF-8 once split.
fn ambient_base_and_suffix(parent: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_parent = parent.as_std_path();

    let (base, suffix) = match std_parent.components().next() {
        // Windows absolute path with a drive or UNC prefix.
        Some(Component::Prefix(prefix)) => {
            let prefix_str = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;

            let base = Utf8PathBuf::from(prefix_str).join(std::path::MAIN_SEPARATOR.to_string());
            let suffix = std_parent
                .strip_prefix(base.as_std_path())
                .or_else(|_| std_parent.strip_prefix(prefix.as_os_str()))
                .map_err(|_| io::Error::other("failed to strip prefix from parent path"))?
                .to_path_buf();
            (base, suffix)
        }
        // Unix-style absolute path.
        Some(Component::RootDir) => {
            let base = Utf8PathBuf::from(std::path::MAIN_SEPARATOR.to_string());
            let suffix = std_parent
                .strip_prefix(base.as_std_path())
                .map_err(|_| io::Error::other("failed to strip root from absolute path"))?
                .to_path_buf();
            (base, suffix)
        }
        // Relative path: resolve from the current directory.
        _ => (Utf8PathBuf::from("."), std_parent.to_path_buf()),
    };

    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    let suffix = Utf8PathBuf::from_path_buf(suffix)
        .map_err(|_| io::Error::other("non-UTF-8 parent path"))?;

    Ok((dir, suffix))
}
