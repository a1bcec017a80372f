use clap::Parser;

/// Command-line interface for the dotfiles installer.
///
/// There are no subcommands and no required arguments: a bare invocation
/// performs the full installation.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "dotfiles-install",
    about = "Idempotent installer for a personal macOS dotfiles repository",
    version
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Preview changes without applying
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Override dotfiles repository root directory
    #[arg(long)]
    pub root: Option<std::path::PathBuf>,
}
