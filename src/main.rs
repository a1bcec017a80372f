use anyhow::Result;
use clap::Parser;

use dotfiles_install::cli;
use dotfiles_install::commands;
use dotfiles_install::logging;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let log = logging::Logger::new(args.verbose);

    commands::install::run(&args, &log)
}
