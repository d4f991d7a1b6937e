use std::{
    fs,
    path::{Path, PathBuf},
};

use pacchetti_constants::INSTALL_DIR;
use pacchetti_error::{PackageManagerError, Result};

pub struct StoreManager;

impl StoreManager {
    /// Stays relative for the current directory so printed globs read
    /// `.spacchetti/...` rather than `./.spacchetti/...`.
    #[must_use]
    pub fn install_dir(project_dir: &Path) -> PathBuf {
        if project_dir == Path::new(".") {
            PathBuf::from(INSTALL_DIR)
        } else {
            project_dir.join(INSTALL_DIR)
        }
    }

    pub fn ensure_install_dir(install_dir: &Path) -> Result<()> {
        fs::create_dir_all(install_dir).map_err(|e| {
            PackageManagerError::Filesystem(install_dir.display().to_string(), e.to_string())
        })?;

        if !install_dir.is_dir() {
            return Err(PackageManagerError::Filesystem(
                install_dir.display().to_string(),
                "not a directory".to_string(),
            ));
        }

        Ok(())
    }

    /// A package counts as installed once its target directory exists.
    #[must_use]
    pub fn is_installed(target: &Path) -> bool {
        target.is_dir()
    }
}

pub fn ensure_install_dir(install_dir: &Path) -> Result<()> {
    StoreManager::ensure_install_dir(install_dir)
}
