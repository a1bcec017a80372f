//! Idempotent resource primitives (check + apply pattern).
pub mod fs;
pub mod package;
pub mod runtime;
pub mod shell;
pub mod symlink;
pub mod template;

use std::path::PathBuf;

use anyhow::Result;

/// State of a resource (symlink, template file, package, …).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Resource does not exist or is not present.
    Missing,
    /// Resource exists and matches the desired state.
    Correct,
    /// Resource exists but does not match the desired state.
    Incorrect {
        /// Description of the current value of the resource.
        current: String,
    },
    /// Resource cannot be applied (e.g., the repository source is missing).
    Invalid {
        /// Reason why the resource cannot be applied.
        reason: String,
    },
}

/// Result of applying a resource change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceChange {
    /// Resource was created or updated without disturbing anything.
    Applied,
    /// A pre-existing target was renamed to the given backup path before
    /// the resource was applied.
    BackedUp {
        /// Path of the backup file (`<target>.backup`).
        backup: PathBuf,
    },
    /// Resource was already correct (no change needed).
    AlreadyCorrect,
    /// Resource was skipped (e.g., missing source file).
    Skipped {
        /// Reason why the resource was skipped.
        reason: String,
    },
}

/// Unified interface for resources that can be checked and applied.
///
/// All resources follow the same check-then-apply pattern:
///
/// ```ignore
/// if resource.needs_change()? {
///     resource.apply()?;
/// }
/// ```
pub trait Resource {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Check the current state of the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource state cannot be determined due to
    /// I/O failures, permission issues, or other system errors.
    fn current_state(&self) -> Result<ResourceState>;

    /// Apply the resource change.
    ///
    /// Implementations create parent directories if needed, bring the
    /// resource to the desired state, and report what happened.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be applied due to I/O
    /// failures, permission issues, or external-command failures.
    fn apply(&self) -> Result<ResourceChange>;

    /// Determine if the resource needs to be changed.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Resource::current_state`].
    fn needs_change(&self) -> Result<bool> {
        Ok(matches!(
            self.current_state()?,
            ResourceState::Missing | ResourceState::Incorrect { .. }
        ))
    }
}
