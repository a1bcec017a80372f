//! asdf runtime plugin task.
use anyhow::{bail, Result};

use super::{Context, Task, TaskResult};
use crate::resources::runtime::{installed_plugins, AsdfPluginResource};
use crate::resources::{Resource, ResourceState};

/// Add the configured asdf plugins.
///
/// Skipped when `asdf` is not on the PATH (the formulae task installs it,
/// but the shell has to be reloaded before it appears). Plugins are added
/// one at a time; a failure on one is logged and the rest still run.
pub struct InstallAsdfPlugins;

impl Task for InstallAsdfPlugins {
    fn name(&self) -> &str {
        "Install asdf plugins"
    }

    fn should_run(&self, ctx: &Context<'_>) -> bool {
        !ctx.config.asdf_plugins.is_empty()
    }

    fn run(&self, ctx: &Context<'_>) -> Result<TaskResult> {
        if !ctx.executor.which("asdf") {
            return Ok(TaskResult::Skipped(
                "asdf not found on PATH (restart the shell and re-run)".to_string(),
            ));
        }

        // One `asdf plugin list` covers every plugin check.
        let installed = installed_plugins(ctx.executor)?;
        let mut failures = 0usize;

        for name in &ctx.config.asdf_plugins {
            let plugin = AsdfPluginResource::new(name.clone(), ctx.executor);

            if plugin.state_from_installed(&installed) == ResourceState::Correct {
                ctx.log.debug(&format!("plugin already added: {name}"));
                continue;
            }

            if ctx.dry_run {
                ctx.log.dry_run(&format!("would add asdf plugin: {name}"));
                continue;
            }

            match plugin.apply() {
                Ok(_) => ctx.log.info(&format!("added asdf plugin: {name}")),
                Err(e) => {
                    ctx.log.error(&format!("{name}: {e:#}"));
                    failures += 1;
                }
            }
        }

        if ctx.dry_run {
            return Ok(TaskResult::DryRun);
        }
        if failures > 0 {
            bail!("{failures} asdf plugin(s) could not be added");
        }
        Ok(TaskResult::Ok)
    }
}
