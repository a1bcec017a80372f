//! Symlink the dotfile mappings into the home directory.
use anyhow::{bail, Result};

use super::{Context, Task, TaskResult};
use crate::config::mapping::Mode;
use crate::resources::symlink::SymlinkResource;
use crate::resources::{Resource, ResourceChange, ResourceState};

/// Link every `Mode::Symlink` mapping entry, backing up whatever regular
/// file or directory is in the way.
///
/// Entries are independent: a failure on one is logged and counted, and the
/// remaining entries are still processed. The task reports failure at the
/// end if any entry failed.
pub struct LinkDotfiles;

impl Task for LinkDotfiles {
    fn name(&self) -> &str {
        "Link dotfiles"
    }

    fn should_run(&self, ctx: &Context<'_>) -> bool {
        ctx.config
            .mappings
            .iter()
            .any(|m| m.mode == Mode::Symlink)
    }

    fn run(&self, ctx: &Context<'_>) -> Result<TaskResult> {
        let mut failures = 0usize;

        for mapping in ctx
            .config
            .mappings
            .iter()
            .filter(|m| m.mode == Mode::Symlink)
        {
            let target = mapping.target_path(&ctx.home);
            let resource = SymlinkResource::new(mapping.source.clone(), target.clone());

            if ctx.dry_run {
                match resource.current_state()? {
                    ResourceState::Correct => {
                        ctx.log.debug(&format!("already-present {}", target.display()));
                    }
                    ResourceState::Missing => {
                        ctx.log.dry_run(&format!(
                            "would link {} -> {}",
                            target.display(),
                            mapping.source.display()
                        ));
                    }
                    ResourceState::Incorrect { current } => {
                        ctx.log.dry_run(&format!(
                            "would replace {} ({current})",
                            target.display()
                        ));
                    }
                    ResourceState::Invalid { reason } => {
                        ctx.log.error(&format!("{}: {reason}", target.display()));
                    }
                }
                continue;
            }

            match resource.apply() {
                Ok(ResourceChange::Applied) => {
                    ctx.log.info(&format!(
                        "created {} -> {}",
                        target.display(),
                        mapping.source.display()
                    ));
                }
                Ok(ResourceChange::BackedUp { backup }) => {
                    ctx.log.info(&format!(
                        "created {} -> {} (previous saved to {})",
                        target.display(),
                        mapping.source.display(),
                        backup.display()
                    ));
                }
                Ok(ResourceChange::AlreadyCorrect) => {
                    ctx.log.debug(&format!("already-present {}", target.display()));
                }
                Ok(ResourceChange::Skipped { reason }) => {
                    // A missing repository source is an entry error; the
                    // remaining entries still run.
                    ctx.log.error(&format!("{}: {reason}", target.display()));
                    failures += 1;
                }
                Err(e) => {
                    ctx.log.error(&format!("{}: {e:#}", target.display()));
                    failures += 1;
                }
            }
        }

        if ctx.dry_run {
            return Ok(TaskResult::DryRun);
        }
        if failures > 0 {
            bail!("{failures} dotfile link(s) could not be created");
        }
        Ok(TaskResult::Ok)
    }
}
