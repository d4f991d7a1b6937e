use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::types::InstallOutcome;
use crate::fetch::PackageFetcher;
use pacchetti_config::{ConfigProvider, PackageRecord};
use pacchetti_error::{PackageManagerError, Result};
use pacchetti_store::{StoreManager, target_path};

pub struct PackageInstaller {
    config: Arc<dyn ConfigProvider>,
    fetcher: Arc<dyn PackageFetcher>,
    install_dir: PathBuf,
    debug: bool,
}

impl PackageInstaller {
    pub fn new(
        config: Arc<dyn ConfigProvider>,
        fetcher: Arc<dyn PackageFetcher>,
        install_dir: &Path,
        debug: bool,
    ) -> Self {
        Self {
            config,
            fetcher,
            install_dir: install_dir.to_path_buf(),
            debug,
        }
    }

    /// Installs one package. Safe to repeat: an existing target directory is
    /// taken as proof of a previous install and nothing is fetched.
    pub fn install(&self, name: &str) -> Result<InstallOutcome> {
        let PackageRecord { repo, version, .. } = PackageRecord::lookup(self.config.as_ref(), name)?;
        let target = target_path(&self.install_dir, name, &version);

        if StoreManager::is_installed(&target) {
            pacchetti_logger::debug(
                &format!("{name}@{version} already present at {}", target.display()),
                self.debug,
            );
            return Ok(InstallOutcome::AlreadyPresent);
        }

        pacchetti_logger::status(&format!("Installing {}", target.display()));

        self.fetcher
            .fetch(&repo, &version, &target)
            .map_err(|e| PackageManagerError::FetchFailed(name.to_string(), format!("{e:#}")))?;

        pacchetti_logger::debug(&format!("Fetched {name}@{version} from {repo}"), self.debug);
        Ok(InstallOutcome::FreshlyInstalled)
    }
}
