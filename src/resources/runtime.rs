//! asdf runtime plugin resource.
use std::collections::HashSet;

use anyhow::Result;

use super::{Resource, ResourceChange, ResourceState};
use crate::error::ResourceError;
use crate::exec::Executor;

/// An asdf plugin that can be checked and added.
#[derive(Debug)]
pub struct AsdfPluginResource<'a> {
    /// Plugin name (e.g. `nodejs`).
    pub name: String,
    /// Executor for running `asdf` commands.
    executor: &'a dyn Executor,
}

impl<'a> AsdfPluginResource<'a> {
    /// Create a new asdf plugin resource.
    #[must_use]
    pub const fn new(name: String, executor: &'a dyn Executor) -> Self {
        Self { name, executor }
    }

    /// Determine the resource state from a pre-fetched set of plugin names.
    #[must_use]
    pub fn state_from_installed(&self, installed: &HashSet<String>) -> ResourceState {
        if installed.contains(&self.name) {
            ResourceState::Correct
        } else {
            ResourceState::Missing
        }
    }
}

/// Query the set of installed asdf plugins with a single `asdf plugin list`.
///
/// # Errors
///
/// Returns an error if `asdf` cannot be executed at all. A non-zero exit
/// (no plugins installed yet) yields an empty set.
pub fn installed_plugins(executor: &dyn Executor) -> Result<HashSet<String>> {
    let result = executor.run_unchecked("asdf", &["plugin", "list"])?;
    let mut set = HashSet::new();
    if result.success {
        for line in result.stdout.lines() {
            let name = line.trim();
            if !name.is_empty() {
                set.insert(name.to_string());
            }
        }
    }
    Ok(set)
}

impl Resource for AsdfPluginResource<'_> {
    fn description(&self) -> String {
        format!("{} (asdf plugin)", self.name)
    }

    fn current_state(&self) -> Result<ResourceState> {
        Ok(self.state_from_installed(&installed_plugins(self.executor)?))
    }

    fn apply(&self) -> Result<ResourceChange> {
        // Plugins are added one at a time; asdf has no batch form.
        self.executor
            .run("asdf", &["plugin", "add", &self.name])
            .map_err(|e| ResourceError::PackageInstall {
                package: self.name.clone(),
                source: e.into(),
            })?;
        Ok(ResourceChange::Applied)
    }
}
