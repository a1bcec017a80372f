//! Shared fixtures for integration tests.
use std::path::{Path, PathBuf};

use dotfiles_install::config::mapping::MAPPINGS;
use dotfiles_install::config::Config;
use dotfiles_install::exec::{ExecResult, Executor};
use dotfiles_install::logging::Logger;
use dotfiles_install::platform::{Arch, Os, Platform};
use dotfiles_install::tasks::{self, Context};

/// A temporary dotfiles repository plus a temporary home directory.
///
/// The repository is populated with every source named in the built-in
/// mapping table, so `Config::builtin` can be exercised end to end against
/// a throwaway home.
pub struct Fixture {
    _dir: tempfile::TempDir,
    pub root: PathBuf,
    pub home: PathBuf,
    pub config: Config,
    pub platform: Platform,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("repo");
        let home = dir.path().join("home");
        std::fs::create_dir_all(&home).unwrap();

        for entry in MAPPINGS {
            let source = root.join(entry.source);
            if is_directory_source(entry.source) {
                std::fs::create_dir_all(&source).unwrap();
                std::fs::write(source.join("example.md"), format!("{}\n", entry.source))
                    .unwrap();
            } else {
                std::fs::create_dir_all(source.parent().unwrap()).unwrap();
                std::fs::write(&source, format!("# {}\n", entry.source)).unwrap();
            }
        }

        let config = Config::builtin(&root);
        Self {
            _dir: dir,
            root,
            home,
            config,
            platform: Platform::new(Os::MacOs, Arch::Arm64),
        }
    }

    /// Run the filesystem tasks (links and templates) against the fixture
    /// home, returning the logger for assertions.
    pub fn run_filesystem_tasks(&self, dry_run: bool) -> Logger {
        let log = Logger::new(false);
        let executor = NoCommandExecutor;
        let ctx = Context::with_home(
            &self.config,
            &self.platform,
            &log,
            dry_run,
            &executor,
            self.home.clone(),
        );
        tasks::execute(&tasks::links::LinkDotfiles, &ctx);
        tasks::execute(&tasks::templates::SeedTemplates, &ctx);
        log
    }

    /// Absolute path of a mapping target inside the fixture home.
    pub fn target(&self, name: &str) -> PathBuf {
        self.home.join(name)
    }

    /// Absolute path of a mapping source inside the fixture repository.
    pub fn source(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }
}

/// Sources without an extension and without a leading dot in the file name
/// are directory mappings in the built-in table.
fn is_directory_source(source: &str) -> bool {
    let name = Path::new(source)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");
    !name.contains('.')
}

/// Executor for filesystem-only tests; fails loudly if a task shells out.
#[derive(Debug)]
struct NoCommandExecutor;

impl Executor for NoCommandExecutor {
    fn run(&self, program: &str, _: &[&str]) -> anyhow::Result<ExecResult> {
        panic!("unexpected command in filesystem test: {program}")
    }

    fn run_in(&self, _: &Path, program: &str, _: &[&str]) -> anyhow::Result<ExecResult> {
        panic!("unexpected command in filesystem test: {program}")
    }

    fn run_unchecked(&self, program: &str, _: &[&str]) -> anyhow::Result<ExecResult> {
        panic!("unexpected command in filesystem test: {program}")
    }

    fn which(&self, _: &str) -> bool {
        false
    }
}
