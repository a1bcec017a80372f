//! Homebrew bootstrap and package installation tasks.
use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::resources::package::{batch_install, installed_packages, BrewKind, BrewPackage};
use crate::resources::ResourceState;

/// Upstream Homebrew installer, run non-interactively. Only its exit
/// status is inspected.
const BREW_INSTALL_CMD: &str = "NONINTERACTIVE=1 /bin/bash -c \
    \"$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)\"";

/// Bootstrap Homebrew itself when `brew` is not on the PATH.
pub struct InstallHomebrew;

impl Task for InstallHomebrew {
    fn name(&self) -> &str {
        "Install Homebrew"
    }

    fn should_run(&self, ctx: &Context<'_>) -> bool {
        ctx.platform.is_macos()
    }

    fn run(&self, ctx: &Context<'_>) -> Result<TaskResult> {
        if ctx.executor.which("brew") {
            ctx.log.debug("brew already installed");
            return Ok(TaskResult::Ok);
        }

        if ctx.dry_run {
            ctx.log.dry_run("would run the Homebrew installer");
            return Ok(TaskResult::DryRun);
        }

        ctx.log.info(&format!(
            "brew not found, installing to {}",
            ctx.platform.brew_prefix().display()
        ));
        ctx.executor.run("sh", &["-c", BREW_INSTALL_CMD])?;
        Ok(TaskResult::Ok)
    }
}

/// Install all missing Homebrew packages of one kind with a single
/// `brew install`.
fn ensure_packages(ctx: &Context<'_>, kind: BrewKind, names: &[String]) -> Result<TaskResult> {
    if !ctx.executor.which("brew") {
        return Ok(TaskResult::Skipped("brew not found on PATH".to_string()));
    }

    // One `brew list` for the whole set instead of one query per package.
    let installed = installed_packages(kind, ctx.executor)?;

    let packages: Vec<BrewPackage<'_>> = names
        .iter()
        .map(|name| BrewPackage::new(name.clone(), kind, ctx.executor))
        .collect();

    let missing: Vec<&BrewPackage<'_>> = packages
        .iter()
        .filter(|p| p.state_from_installed(&installed) == ResourceState::Missing)
        .collect();

    if missing.is_empty() {
        ctx.log
            .debug(&format!("all {} {kind}(s) already installed", names.len()));
        return Ok(TaskResult::Ok);
    }

    let missing_names: Vec<&str> = missing.iter().map(|p| p.name.as_str()).collect();

    if ctx.dry_run {
        ctx.log
            .dry_run(&format!("would install: {}", missing_names.join(", ")));
        return Ok(TaskResult::DryRun);
    }

    ctx.log
        .info(&format!("installing: {}", missing_names.join(", ")));
    batch_install(&missing)?;
    Ok(TaskResult::Ok)
}

/// Install the configured command-line formulae.
pub struct InstallFormulae;

impl Task for InstallFormulae {
    fn name(&self) -> &str {
        "Install formulae"
    }

    fn should_run(&self, ctx: &Context<'_>) -> bool {
        ctx.platform.is_macos() && !ctx.config.formulae.is_empty()
    }

    fn run(&self, ctx: &Context<'_>) -> Result<TaskResult> {
        ensure_packages(ctx, BrewKind::Formula, &ctx.config.formulae)
    }
}

/// Install the configured GUI application casks.
pub struct InstallCasks;

impl Task for InstallCasks {
    fn name(&self) -> &str {
        "Install casks"
    }

    fn should_run(&self, ctx: &Context<'_>) -> bool {
        ctx.platform.is_macos() && !ctx.config.casks.is_empty()
    }

    fn run(&self, ctx: &Context<'_>) -> Result<TaskResult> {
        ensure_packages(ctx, BrewKind::Cask, &ctx.config.casks)
    }
}
