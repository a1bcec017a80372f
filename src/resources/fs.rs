//! File-system resource helpers.
use std::path::{Path, PathBuf};

use crate::error::ResourceError;

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// Shared by resource `apply()` methods that need container directories
/// (e.g. `~/.claude/`) before writing a file or symlink.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<(), ResourceError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ResourceError::CreateDir {
            dir: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Backup path for a target: `.backup` appended to the full file name.
///
/// Appending (rather than [`Path::with_extension`]) keeps dotted names
/// intact: `.zshrc` becomes `.zshrc.backup`, `config.toml` becomes
/// `config.toml.backup`.
#[must_use]
pub fn backup_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map_or_else(|| "target".into(), std::ffi::OsString::from);
    name.push(".backup");
    target.with_file_name(name)
}

/// Rename `target` to its `.backup` path, replacing any previous backup.
///
/// Backups are overwritten on rerun, not versioned. A previous backup that
/// is a directory is removed first, since `rename` will not replace a
/// non-empty directory.
///
/// # Errors
///
/// Returns an error if the previous backup cannot be removed or the rename
/// fails.
pub fn backup_existing(target: &Path) -> Result<PathBuf, ResourceError> {
    let backup = backup_path(target);

    if let Ok(meta) = backup.symlink_metadata() {
        let removed = if meta.is_dir() {
            std::fs::remove_dir_all(&backup)
        } else {
            std::fs::remove_file(&backup)
        };
        removed.map_err(|source| ResourceError::Backup {
            target: target.to_path_buf(),
            backup: backup.clone(),
            source,
        })?;
    }

    std::fs::rename(target, &backup).map_err(|source| ResourceError::Backup {
        target: target.to_path_buf(),
        backup: backup.clone(),
        source,
    })?;

    Ok(backup)
}

/// Remove an existing file or symlink at `path`, including broken symlinks.
///
/// Does nothing if `path` does not exist.
///
/// # Errors
///
/// Returns an error if the path exists but cannot be removed.
pub fn remove_existing(path: &Path) -> Result<(), ResourceError> {
    if path.symlink_metadata().is_ok() {
        std::fs::remove_file(path).map_err(|source| ResourceError::Symlink {
            target: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
