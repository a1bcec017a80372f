//! Static package and plugin lists for the external collaborators.
//!
//! These arrays mirror the Homebrew formula/cask and asdf plugin sets the
//! repository expects on a fresh machine. The installer never inspects the
//! collaborators' behaviour; it only checks what is already installed and
//! asks for the rest.

/// Homebrew formulae installed on every machine.
pub const FORMULAE: &[&str] = &[
    "asdf",
    "fzf",
    "gh",
    "git",
    "jq",
    "ripgrep",
    "shellcheck",
    "tmux",
    "zsh",
];

/// Homebrew casks (GUI applications).
pub const CASKS: &[&str] = &["ghostty", "rectangle"];

/// asdf runtime plugins.
pub const ASDF_PLUGINS: &[&str] = &["nodejs", "python", "ruby"];
