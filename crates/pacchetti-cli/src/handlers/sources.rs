use anyhow::Result;

pub struct SourcesHandler;

impl SourcesHandler {
    /// Plain lines on stdout, ready to be piped into another tool.
    pub fn handle_sources(project_dir: &str, debug: bool) -> Result<()> {
        let globs = pacchetti_core::list_sources(project_dir, debug)?;
        pacchetti_logger::clear_status();

        for glob in globs {
            println!("{glob}");
        }
        Ok(())
    }
}
