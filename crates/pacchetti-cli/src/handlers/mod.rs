pub mod build;
pub mod install;
pub mod sources;

pub use build::BuildHandler;
pub use install::InstallHandler;
pub use sources::SourcesHandler;

use owo_colors::OwoColorize;

pub(crate) fn print_header(command: &str, quiet: bool) {
    if quiet {
        return;
    }
    println!(
        "{} {}",
        pacchetti_constants::BIN_NAME.bright_cyan().bold(),
        command.bright_white()
    );
    println!();
}
