//! Named units of work wired to resources, executed sequentially.
mod context;
pub mod links;
pub mod packages;
pub mod runtimes;
pub mod shell;
pub mod templates;

pub use context::Context;

use anyhow::Result;

use crate::logging::TaskStatus;

/// Outcome of a task run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    /// Task ran to completion.
    Ok,
    /// Task did not run, with a reason (e.g. required tool not found).
    Skipped(String),
    /// Task previewed its changes without applying them.
    DryRun,
}

/// A named, executable task.
pub trait Task {
    /// Human-readable task name.
    fn name(&self) -> &str;

    /// Whether this task applies on the current platform/configuration.
    fn should_run(&self, ctx: &Context<'_>) -> bool;

    /// Execute the task.
    ///
    /// # Errors
    ///
    /// Returns an error if the task fails, such as when external commands
    /// fail or file operations are not permitted. Per-entry errors inside a
    /// task are logged and counted; the task reports failure at the end so
    /// later entries still get processed.
    fn run(&self, ctx: &Context<'_>) -> Result<TaskResult>;
}

/// The complete set of tasks run by the installer, in execution order.
///
/// Order is fixed: filesystem mappings first, then the external
/// collaborators. Entries within a task are independent of each other.
#[must_use]
pub fn all_install_tasks() -> Vec<Box<dyn Task>> {
    vec![
        Box::new(links::LinkDotfiles),
        Box::new(templates::SeedTemplates),
        Box::new(packages::InstallHomebrew),
        Box::new(packages::InstallFormulae),
        Box::new(packages::InstallCasks),
        Box::new(shell::InstallOhMyZsh),
        Box::new(runtimes::InstallAsdfPlugins),
    ]
}

/// Execute a task, recording the result in the logger.
pub fn execute(task: &dyn Task, ctx: &Context<'_>) {
    if !task.should_run(ctx) {
        ctx.log
            .debug(&format!("skipping task: {} (not applicable)", task.name()));
        ctx.log
            .record_task(task.name(), TaskStatus::NotApplicable, None);
        return;
    }

    ctx.log.stage(task.name());

    match task.run(ctx) {
        Ok(TaskResult::Ok) => {
            ctx.log.record_task(task.name(), TaskStatus::Ok, None);
        }
        Ok(TaskResult::Skipped(reason)) => {
            ctx.log.info(&format!("skipped: {reason}"));
            ctx.log
                .record_task(task.name(), TaskStatus::Skipped, Some(&reason));
        }
        Ok(TaskResult::DryRun) => {
            ctx.log.record_task(task.name(), TaskStatus::DryRun, None);
        }
        Err(e) => {
            ctx.log.error(&format!("{}: {e:#}", task.name()));
            ctx.log
                .record_task(task.name(), TaskStatus::Failed, Some(&format!("{e:#}")));
        }
    }
}
