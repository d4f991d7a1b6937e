use anyhow::Result;

pub struct BuildHandler;

impl BuildHandler {
    pub fn handle_build(
        project_dir: &str,
        install: bool,
        jobs: Option<usize>,
        debug: bool,
        quiet: bool,
    ) -> Result<()> {
        super::print_header("build", quiet);
        if install {
            pacchetti_core::install_deps(project_dir, jobs, debug)?;
        }
        pacchetti_core::build_project(project_dir, debug)
    }
}
