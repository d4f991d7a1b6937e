use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::compile::BuildTool;
use crate::fetch::PackageFetcher;
use crate::install::{InstallManager, InstallSummary, PackageInstaller};
use crate::sources::{collect_source_globs, sorted_globs};
use pacchetti_config::{ConfigProvider, JsonConfig, ensure_config};
use pacchetti_constants::INSTALL_DIR;
use pacchetti_error::Result;
use pacchetti_resolver::{ResolvedSet, resolve_project};
use pacchetti_store::{StoreManager, ensure_install_dir};
use pacchetti_symcap::SystemCapabilities;

/// A project directory together with its loaded package registry.
pub struct Project {
    project_dir: PathBuf,
    install_dir: PathBuf,
    config: Arc<dyn ConfigProvider>,
    debug: bool,
}

impl Project {
    /// Creates the install root, generates the registry if needed and loads it.
    pub fn open(project_dir: &Path, debug: bool) -> Result<Self> {
        let install_dir = StoreManager::install_dir(project_dir);
        ensure_install_dir(&install_dir)?;

        let config_path = ensure_config(project_dir, &install_dir, debug)?;
        let config = JsonConfig::load(&config_path)?;

        Ok(Self::with_config(project_dir, Arc::new(config), debug))
    }

    pub fn with_config(project_dir: &Path, config: Arc<dyn ConfigProvider>, debug: bool) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            install_dir: StoreManager::install_dir(project_dir),
            config,
            debug,
        }
    }

    #[must_use]
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    #[must_use]
    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    pub fn resolve(&self) -> Result<ResolvedSet> {
        pacchetti_logger::status("Resolving dependencies...");
        resolve_project(self.config.as_ref(), self.debug)
    }

    pub async fn install(
        &self,
        names: &ResolvedSet,
        fetcher: Arc<dyn PackageFetcher>,
        jobs: Option<usize>,
    ) -> Result<InstallSummary> {
        let jobs = SystemCapabilities::get().install_jobs_for(jobs, names.len());
        let installer = PackageInstaller::new(
            Arc::clone(&self.config),
            fetcher,
            &self.install_dir,
            self.debug,
        );

        InstallManager::new(installer, jobs, self.debug)
            .install_all(names)
            .await
    }

    pub fn source_globs(&self, names: &ResolvedSet) -> Result<HashSet<String>> {
        collect_source_globs(self.config.as_ref(), &self.install_dir, names)
    }

    /// Resolves, then hands the sorted dependency globs to `tool`. The tool
    /// runs inside the project directory, so the globs are relative to it.
    pub fn build(&self, tool: &dyn BuildTool) -> Result<()> {
        let names = self.resolve()?;
        let globs = sorted_globs(&collect_source_globs(
            self.config.as_ref(),
            Path::new(INSTALL_DIR),
            &names,
        )?);

        pacchetti_logger::debug(
            &format!("Compiling against {} dependency globs", globs.len()),
            self.debug,
        );
        tool.compile(&globs)
    }
}
