use anyhow::Result;

pub struct InstallHandler;

impl InstallHandler {
    pub fn handle_install(
        project_dir: &str,
        jobs: Option<usize>,
        debug: bool,
        quiet: bool,
    ) -> Result<()> {
        super::print_header("install", quiet);
        pacchetti_core::install_deps(project_dir, jobs, debug)
    }
}
