//! Oh My Zsh installation task.
use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::resources::shell::OhMyZshResource;
use crate::resources::{Resource, ResourceChange, ResourceState};

/// Install the Oh My Zsh framework when `~/.oh-my-zsh` is absent.
///
/// The upstream installer is treated as opaque: only its exit status is
/// inspected, and it runs with flags that stop it from replacing the
/// symlinked `~/.zshrc` or exec'ing a new shell.
pub struct InstallOhMyZsh;

impl Task for InstallOhMyZsh {
    fn name(&self) -> &str {
        "Install oh-my-zsh"
    }

    fn should_run(&self, _ctx: &Context<'_>) -> bool {
        true
    }

    fn run(&self, ctx: &Context<'_>) -> Result<TaskResult> {
        let resource = OhMyZshResource::new(&ctx.home, ctx.executor);

        if ctx.dry_run {
            if resource.current_state()? == ResourceState::Missing {
                ctx.log.dry_run("would run the oh-my-zsh installer");
                return Ok(TaskResult::DryRun);
            }
            ctx.log.debug("oh-my-zsh already installed");
            return Ok(TaskResult::DryRun);
        }

        match resource.apply()? {
            ResourceChange::Applied => {
                ctx.log.info("installed oh-my-zsh");
            }
            ResourceChange::AlreadyCorrect => {
                ctx.log.debug("oh-my-zsh already installed");
            }
            ResourceChange::BackedUp { .. } | ResourceChange::Skipped { .. } => {}
        }
        Ok(TaskResult::Ok)
    }
}
