//! Domain-specific error types for the installer.
//!
//! Resource primitives return typed [`ResourceError`]s; task and command
//! code at the boundary converts them to [`anyhow::Error`] via the standard
//! `?` operator and attaches context there.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that arise from resource operations (symlinks, templates, packages).
#[derive(Error, Debug)]
pub enum ResourceError {
    /// Creating or replacing a symlink failed.
    #[error("symlink error at {target}: {source}")]
    Symlink {
        /// Target path of the symlink.
        target: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Renaming a pre-existing target to its `.backup` path failed.
    #[error("backup of {target} to {backup} failed: {source}")]
    Backup {
        /// Target that was being backed up.
        target: PathBuf,
        /// Backup destination path.
        backup: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Copying a template into place failed.
    #[error("template copy to {target} failed: {source}")]
    TemplateCopy {
        /// Destination of the copy.
        target: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Creating a container directory failed.
    #[error("create directory {dir} failed: {source}")]
    CreateDir {
        /// Directory that could not be created.
        dir: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A package installation command failed.
    #[error("package installation failed: {package}")]
    PackageInstall {
        /// Name of the package (formula, cask, or plugin).
        package: String,
        /// Underlying error from the package manager.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
