//! Build-time configuration: the mapping table and package lists.
pub mod mapping;
pub mod packages;

use std::path::{Path, PathBuf};

use mapping::{Mapping, MAPPINGS};

/// All configuration for an installer run.
///
/// The entries and package lists are fixed at build time; only the
/// repository root is resolved at run time. Fields are public so tests can
/// construct arbitrary tables against temporary directories.
#[derive(Debug)]
pub struct Config {
    /// Absolute path of the dotfiles repository root.
    pub root: PathBuf,
    /// Resolved mapping entries (symlinks and templates).
    pub mappings: Vec<Mapping>,
    /// Homebrew formulae to ensure installed.
    pub formulae: Vec<String>,
    /// Homebrew casks to ensure installed.
    pub casks: Vec<String>,
    /// asdf plugins to ensure installed.
    pub asdf_plugins: Vec<String>,
}

impl Config {
    /// Build the configuration from the built-in tables, resolved against `root`.
    #[must_use]
    pub fn builtin(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            mappings: MAPPINGS
                .iter()
                .map(|entry| Mapping::resolve(entry, root))
                .collect(),
            formulae: packages::FORMULAE.iter().map(ToString::to_string).collect(),
            casks: packages::CASKS.iter().map(ToString::to_string).collect(),
            asdf_plugins: packages::ASDF_PLUGINS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// An empty configuration rooted at `root` (test fixture starting point).
    #[must_use]
    pub fn empty(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            mappings: Vec::new(),
            formulae: Vec::new(),
            casks: Vec::new(),
            asdf_plugins: Vec::new(),
        }
    }
}
