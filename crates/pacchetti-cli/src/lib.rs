pub mod commands;
pub mod handlers;

use clap::Parser;

use commands::{Cli, Commands};
use handlers::{BuildHandler, InstallHandler, SourcesHandler};

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    pacchetti_logger::init_logger(cli.quiet);

    match cli.command {
        Commands::Install { jobs } => {
            InstallHandler::handle_install(&cli.project_dir, jobs, cli.debug, cli.quiet)
        }
        Commands::Sources => SourcesHandler::handle_sources(&cli.project_dir, cli.debug),
        Commands::Build { install, jobs } => {
            BuildHandler::handle_build(&cli.project_dir, install, jobs, cli.debug, cli.quiet)
        }
    }
}
