//! The static mapping table: repository files → home-directory paths.
use std::path::{Path, PathBuf};

/// How a mapping entry is materialised at its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Target should always reflect the current repository source file.
    /// Pre-existing non-symlink targets are renamed to `<target>.backup`.
    Symlink,
    /// Machine-specific template: copied on first install, never overwritten
    /// once the target exists in any form.
    CopyIfAbsent,
}

/// A single build-time mapping entry.
///
/// `source` is relative to the repository root; `target` is written with a
/// `~/` prefix and resolved against the user's home directory at run time.
#[derive(Debug, Clone, Copy)]
pub struct MappingEntry {
    pub source: &'static str,
    pub target: &'static str,
    pub mode: Mode,
}

/// The complete mapping table.
///
/// Entries are independent of each other; the only ordering requirement is
/// that container directories (e.g. `~/.claude/`) exist before their
/// children, which `apply()` satisfies by creating parent directories.
pub const MAPPINGS: &[MappingEntry] = &[
    MappingEntry {
        source: "config/zsh/.zshrc",
        target: "~/.zshrc",
        mode: Mode::Symlink,
    },
    MappingEntry {
        source: "config/zsh/.zprofile",
        target: "~/.zprofile",
        mode: Mode::Symlink,
    },
    MappingEntry {
        source: "config/zsh/.zshrc.local.template",
        target: "~/.zshrc.local",
        mode: Mode::CopyIfAbsent,
    },
    MappingEntry {
        source: "config/git/.gitconfig",
        target: "~/.gitconfig",
        mode: Mode::Symlink,
    },
    MappingEntry {
        source: "config/git/.gitignore_global",
        target: "~/.gitignore_global",
        mode: Mode::Symlink,
    },
    MappingEntry {
        source: "config/git/.gitconfig.local.template",
        target: "~/.gitconfig.local",
        mode: Mode::CopyIfAbsent,
    },
    MappingEntry {
        source: "config/asdf/.tool-versions",
        target: "~/.tool-versions",
        mode: Mode::Symlink,
    },
    MappingEntry {
        source: "docs/CLAUDE.md",
        target: "~/.claude/CLAUDE.md",
        mode: Mode::Symlink,
    },
    MappingEntry {
        source: "docs/agents",
        target: "~/.claude/agents",
        mode: Mode::Symlink,
    },
    MappingEntry {
        source: "docs/styles",
        target: "~/.claude/styles",
        mode: Mode::Symlink,
    },
];

/// A mapping entry resolved against a concrete repository root.
///
/// `source` is absolute; `target` stays relative to the home directory so
/// the same mapping can be applied against any home (real or test fixture).
#[derive(Debug, Clone)]
pub struct Mapping {
    /// Absolute path of the source file or directory in the repository.
    pub source: PathBuf,
    /// Target path relative to the home directory (e.g. `.zshrc`).
    pub target: PathBuf,
    /// Materialisation mode.
    pub mode: Mode,
}

impl Mapping {
    /// Resolve a static entry against the repository root.
    #[must_use]
    pub fn resolve(entry: &MappingEntry, root: &Path) -> Self {
        Self {
            source: root.join(entry.source),
            target: PathBuf::from(home_relative(entry.target)),
            mode: entry.mode,
        }
    }

    /// Absolute target path inside the given home directory.
    #[must_use]
    pub fn target_path(&self, home: &Path) -> PathBuf {
        home.join(&self.target)
    }
}

/// Strip the `~/` prefix from a target string.
fn home_relative(target: &str) -> &str {
    target.strip_prefix("~/").unwrap_or(target)
}
