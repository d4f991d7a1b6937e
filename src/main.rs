use std::process::ExitCode;

fn main() -> ExitCode {
    match pacchetti_cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            pacchetti_logger::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
