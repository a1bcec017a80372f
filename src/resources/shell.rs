//! Oh My Zsh framework resource.
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::{Resource, ResourceChange, ResourceState};
use crate::exec::Executor;

/// Upstream installer, run non-interactively. The installer is an opaque
/// collaborator: only its exit status is inspected.
const INSTALL_CMD: &str = "curl -fsSL \
    https://raw.githubusercontent.com/ohmyzsh/ohmyzsh/master/tools/install.sh \
    | RUNZSH=no KEEP_ZSHRC=yes sh";

/// The Oh My Zsh framework directory in the user's home.
#[derive(Debug)]
pub struct OhMyZshResource<'a> {
    /// `~/.oh-my-zsh`
    install_dir: PathBuf,
    /// Executor for running the upstream installer.
    executor: &'a dyn Executor,
}

impl<'a> OhMyZshResource<'a> {
    /// Create a resource for the given home directory.
    #[must_use]
    pub fn new(home: &Path, executor: &'a dyn Executor) -> Self {
        Self {
            install_dir: home.join(".oh-my-zsh"),
            executor,
        }
    }
}

impl Resource for OhMyZshResource<'_> {
    fn description(&self) -> String {
        format!("oh-my-zsh at {}", self.install_dir.display())
    }

    fn current_state(&self) -> Result<ResourceState> {
        if self.install_dir.is_dir() {
            Ok(ResourceState::Correct)
        } else {
            Ok(ResourceState::Missing)
        }
    }

    fn apply(&self) -> Result<ResourceChange> {
        if self.install_dir.is_dir() {
            return Ok(ResourceChange::AlreadyCorrect);
        }
        // RUNZSH=no keeps the installer from exec'ing a new shell;
        // KEEP_ZSHRC=yes stops it from touching the symlinked ~/.zshrc.
        self.executor.run("sh", &["-c", INSTALL_CMD])?;
        Ok(ResourceChange::Applied)
    }
}
