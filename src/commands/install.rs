//! The install command: run every task in order and map failures to the
//! exit code.
use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};

use crate::cli::Cli;
use crate::config::Config;
use crate::exec::SystemExecutor;
use crate::logging::Logger;
use crate::platform::Platform;
use crate::tasks::{self, Context};

/// Run the installation.
///
/// Tasks run sequentially; a failing task is recorded and the remaining
/// tasks still run. The process exits non-zero if any task failed.
///
/// # Errors
///
/// Returns an error when the repository root cannot be resolved, when the
/// home directory is unknown, or when at least one task failed.
pub fn run(args: &Cli, log: &Logger) -> Result<()> {
    let root = resolve_root(args.root.as_deref())?;
    log.debug(&format!("dotfiles root: {}", root.display()));

    let config = Config::builtin(&root);
    let platform = Platform::detect();
    let executor = SystemExecutor;
    let ctx = Context::new(&config, &platform, log, args.dry_run, &executor)?;

    if args.dry_run {
        log.warn("dry run: no changes will be made");
    }

    for task in tasks::all_install_tasks() {
        tasks::execute(task.as_ref(), &ctx);
    }

    log.print_summary();

    if log.has_failures() {
        bail!("{} task(s) failed", log.failure_count());
    }
    Ok(())
}

/// Locate the dotfiles repository root.
///
/// Resolution order:
///
/// 1. the `--root` flag
/// 2. the `DOTFILES_ROOT` environment variable
/// 3. walking up from the executable's location to a directory that
///    contains `config/` (covers running from a repository checkout)
/// 4. the current directory, if it contains `config/`
fn resolve_root(flag: Option<&std::path::Path>) -> Result<PathBuf> {
    if let Some(root) = flag {
        let root = root
            .canonicalize()
            .with_context(|| format!("invalid --root: {}", root.display()))?;
        return validate_root(root);
    }

    if let Ok(env_root) = std::env::var("DOTFILES_ROOT") {
        let root = PathBuf::from(env_root);
        let root = root
            .canonicalize()
            .with_context(|| format!("invalid DOTFILES_ROOT: {}", root.display()))?;
        return validate_root(root);
    }

    if let Ok(exe) = std::env::current_exe() {
        let mut dir = exe.parent();
        while let Some(candidate) = dir {
            if candidate.join("config").is_dir() {
                return Ok(candidate.to_path_buf());
            }
            dir = candidate.parent();
        }
    }

    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    if cwd.join("config").is_dir() {
        return Ok(cwd);
    }

    bail!(
        "cannot locate the dotfiles repository; pass --root or set DOTFILES_ROOT"
    )
}

/// Reject roots that are clearly not a dotfiles checkout.
fn validate_root(root: PathBuf) -> Result<PathBuf> {
    if !root.join("config").is_dir() {
        bail!(
            "{} does not look like a dotfiles repository (no config/ directory)",
            root.display()
        );
    }
    Ok(root)
}
