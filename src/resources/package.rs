//! Homebrew package resource.
use std::collections::HashSet;

use anyhow::Result;

use super::{Resource, ResourceChange, ResourceState};
use crate::error::ResourceError;
use crate::exec::Executor;

/// Kind of Homebrew package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrewKind {
    /// Command-line formula.
    Formula,
    /// GUI application cask.
    Cask,
}

impl BrewKind {
    /// The `brew list` / `brew install` selector flag for this kind.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Formula => "--formula",
            Self::Cask => "--cask",
        }
    }
}

impl std::fmt::Display for BrewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Formula => write!(f, "formula"),
            Self::Cask => write!(f, "cask"),
        }
    }
}

/// A Homebrew package that can be checked and installed.
#[derive(Debug)]
pub struct BrewPackage<'a> {
    /// Formula or cask name.
    pub name: String,
    /// Package kind.
    pub kind: BrewKind,
    /// Executor for running `brew` commands.
    executor: &'a dyn Executor,
}

impl<'a> BrewPackage<'a> {
    /// Create a new Homebrew package resource.
    #[must_use]
    pub const fn new(name: String, kind: BrewKind, executor: &'a dyn Executor) -> Self {
        Self {
            name,
            kind,
            executor,
        }
    }

    /// Determine the resource state from a pre-fetched set of installed names.
    ///
    /// Avoids running a per-package query when used with
    /// [`installed_packages`].
    #[must_use]
    pub fn state_from_installed(&self, installed: &HashSet<String>) -> ResourceState {
        if installed.contains(&self.name) {
            ResourceState::Correct
        } else {
            ResourceState::Missing
        }
    }
}

/// Query the full set of installed package names for a given kind.
///
/// Runs a **single** `brew list` regardless of how many packages need to be
/// checked, instead of one command per package as with
/// [`Resource::current_state`].
///
/// # Errors
///
/// Returns an error if `brew` cannot be executed at all. A non-zero exit
/// (e.g. nothing installed yet) yields an empty set.
pub fn installed_packages(kind: BrewKind, executor: &dyn Executor) -> Result<HashSet<String>> {
    // One name per line with -1; casks and formulae are listed separately.
    let result = executor.run_unchecked("brew", &["list", kind.flag(), "-1"])?;
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

/// Install a batch of packages of one kind in a single `brew install`.
///
/// Homebrew accepts multiple names per invocation, so one command installs
/// every missing package of a kind. The packages' shared executor is used.
///
/// # Errors
///
/// Returns a [`ResourceError::PackageInstall`] naming the first package of
/// the batch if the install command fails.
pub fn batch_install(packages: &[&BrewPackage<'_>]) -> Result<()> {
    let Some(first) = packages.first() else {
        return Ok(());
    };

    let mut args = vec!["install", first.kind.flag()];
    args.extend(packages.iter().map(|p| p.name.as_str()));

    first
        .executor
        .run("brew", &args)
        .map_err(|e| ResourceError::PackageInstall {
            package: first.name.clone(),
            source: e.into(),
        })?;
    Ok(())
}

impl Resource for BrewPackage<'_> {
    fn description(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }

    fn current_state(&self) -> Result<ResourceState> {
        let result = self
            .executor
            .run_unchecked("brew", &["list", self.kind.flag(), &self.name])?;
        if result.success {
            Ok(ResourceState::Correct)
        } else {
            Ok(ResourceState::Missing)
        }
    }

    fn apply(&self) -> Result<ResourceChange> {
        self.executor
            .run("brew", &["install", self.kind.flag(), &self.name])
            .map_err(|e| ResourceError::PackageInstall {
                package: self.name.clone(),
                source: e.into(),
            })?;
        Ok(ResourceChange::Applied)
    }
}
