//! Idempotent installer for a personal macOS dotfiles repository.
//!
//! A single command with no required arguments that makes a fixed set of
//! repository configuration files reachable at fixed home-directory paths
//! (symlinks with backup of pre-existing files, copy-once templates), then
//! drives the opaque external collaborators (Homebrew, Oh My Zsh, asdf),
//! checking only their exit status.
//!
//! The code is organised into four layers:
//!
//! - **[`config`]**: the static mapping table and package lists
//! - **[`resources`]**: idempotent check-then-apply primitives (symlinks, templates, packages)
//! - **[`tasks`]**: named units of work wired to resources, run sequentially
//! - **[`commands`]**: top-level orchestration and exit-code mapping
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod platform;
pub mod resources;
pub mod tasks;
