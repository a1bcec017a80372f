use std::path::PathBuf;

use anyhow::Result;

use crate::config::Config;
use crate::exec::Executor;
use crate::logging::Logger;
use crate::platform::Platform;

/// Shared context for task execution.
///
/// Tasks run sequentially and borrow everything; there is no shared mutable
/// state between entries.
pub struct Context<'a> {
    /// Build-time configuration resolved against the repository root.
    pub config: &'a Config,
    /// Detected platform information.
    pub platform: &'a Platform,
    /// Logger for output and task recording.
    pub log: &'a Logger,
    /// Whether to preview changes without applying.
    pub dry_run: bool,
    /// User's home directory path.
    pub home: PathBuf,
    /// Command executor for external collaborators.
    pub executor: &'a dyn Executor,
}

impl<'a> Context<'a> {
    /// Creates a new context, resolving the home directory from `$HOME`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HOME environment variable is not set.
    pub fn new(
        config: &'a Config,
        platform: &'a Platform,
        log: &'a Logger,
        dry_run: bool,
        executor: &'a dyn Executor,
    ) -> Result<Self> {
        let home = std::env::var("HOME")
            .map_err(|_| anyhow::anyhow!("HOME environment variable is not set"))?;
        Ok(Self::with_home(
            config,
            platform,
            log,
            dry_run,
            executor,
            PathBuf::from(home),
        ))
    }

    /// Creates a context with an explicit home directory.
    ///
    /// Integration tests use this to point tasks at a temporary fixture
    /// instead of the real home.
    #[must_use]
    pub fn with_home(
        config: &'a Config,
        platform: &'a Platform,
        log: &'a Logger,
        dry_run: bool,
        executor: &'a dyn Executor,
        home: PathBuf,
    ) -> Self {
        Self {
            config,
            platform,
            log,
            dry_run,
            home,
            executor,
        }
    }
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("root", &self.config.root)
            .field("platform", &self.platform)
            .field("dry_run", &self.dry_run)
            .field("home", &self.home)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::SystemExecutor;
    use crate::platform::{Arch, Os};
    use std::path::Path;

    #[test]
    fn with_home_uses_given_home() {
        let config = Config::empty(Path::new("/repo"));
        let platform = Platform::new(Os::MacOs, Arch::Arm64);
        let log = Logger::new(false);
        let executor = SystemExecutor;
        let ctx = Context::with_home(
            &config,
            &platform,
            &log,
            false,
            &executor,
            PathBuf::from("/home/test"),
        );
        assert_eq!(ctx.home, PathBuf::from("/home/test"));
        assert!(!ctx.dry_run);
    }

    #[test]
    fn debug_format_includes_key_fields() {
        let config = Config::empty(Path::new("/repo"));
        let platform = Platform::new(Os::MacOs, Arch::Arm64);
        let log = Logger::new(false);
        let executor = SystemExecutor;
        let ctx = Context::with_home(
            &config,
            &platform,
            &log,
            true,
            &executor,
            PathBuf::from("/home/test"),
        );
        let debug = format!("{ctx:?}");
        assert!(debug.contains("Context"));
        assert!(debug.contains("dry_run"));
        assert!(debug.contains("home"));
    }
}
