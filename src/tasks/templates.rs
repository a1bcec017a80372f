//! Seed machine-specific files from repository templates.
use anyhow::{bail, Result};

use super::{Context, Task, TaskResult};
use crate::config::mapping::Mode;
use crate::resources::template::TemplateResource;
use crate::resources::{Resource, ResourceChange, ResourceState};

/// Copy every `Mode::CopyIfAbsent` mapping entry whose target does not yet
/// exist. Existing targets are never overwritten and never backed up.
pub struct SeedTemplates;

impl Task for SeedTemplates {
    fn name(&self) -> &str {
        "Seed templates"
    }

    fn should_run(&self, ctx: &Context<'_>) -> bool {
        ctx.config
            .mappings
            .iter()
            .any(|m| m.mode == Mode::CopyIfAbsent)
    }

    fn run(&self, ctx: &Context<'_>) -> Result<TaskResult> {
        let mut failures = 0usize;

        for mapping in ctx
            .config
            .mappings
            .iter()
            .filter(|m| m.mode == Mode::CopyIfAbsent)
        {
            let target = mapping.target_path(&ctx.home);
            let resource = TemplateResource::new(mapping.source.clone(), target.clone());

            if ctx.dry_run {
                match resource.current_state()? {
                    ResourceState::Missing => {
                        ctx.log.dry_run(&format!(
                            "would copy {} from {}",
                            target.display(),
                            mapping.source.display()
                        ));
                    }
                    ResourceState::Correct => {
                        ctx.log.debug(&format!("already-present {}", target.display()));
                    }
                    ResourceState::Invalid { reason } => {
                        ctx.log.error(&format!("{}: {reason}", target.display()));
                    }
                    ResourceState::Incorrect { .. } => {}
                }
                continue;
            }

            match resource.apply() {
                Ok(ResourceChange::Applied) => {
                    ctx.log.info(&format!(
                        "seeded {} from {}",
                        target.display(),
                        mapping.source.display()
                    ));
                }
                Ok(ResourceChange::AlreadyCorrect) => {
                    ctx.log.debug(&format!("already-present {}", target.display()));
                }
                Ok(ResourceChange::Skipped { reason }) => {
                    ctx.log.error(&format!("{}: {reason}", target.display()));
                    failures += 1;
                }
                Ok(ResourceChange::BackedUp { .. }) => {
                    // Templates never back up; apply() cannot return this.
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
            bail!("{failures} template(s) could not be seeded");
        }
        Ok(TaskResult::Ok)
    }
}
