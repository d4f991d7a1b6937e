use std::path::{Path, PathBuf};

use pacchetti_constants::SOURCE_GLOB_SUFFIX;

pub struct PathResolver;

impl PathResolver {
    /// `<install_dir>/<name>/<version>`. Pure function of its inputs, which is
    /// what makes "the directory exists" a sound idempotency check.
    #[must_use]
    pub fn target_path(install_dir: &Path, package_name: &str, version: &str) -> PathBuf {
        install_dir
            .join(Self::sanitize_component(package_name))
            .join(Self::sanitize_component(version))
    }

    #[must_use]
    pub fn source_glob(install_dir: &Path, package_name: &str, version: &str) -> String {
        let target = Self::target_path(install_dir, package_name, version);
        format!(
            "{}/{SOURCE_GLOB_SUFFIX}",
            target.to_string_lossy().replace('\\', "/")
        )
    }

    /// Encodes a registry value as one path component that stays inside the
    /// install root. `_` is doubled before anything else is escaped, so two
    /// distinct values never share a directory.
    #[must_use]
    pub fn sanitize_component(component: &str) -> String {
        match component {
            "" => "_empty".to_string(),
            "." => "_dot".to_string(),
            ".." => "_dotdot".to_string(),
            _ => component
                .replace('_', "__")
                .replace('/', "_slash")
                .replace('\\', "_bslash"),
        }
    }
}

#[must_use]
pub fn target_path(install_dir: &Path, package_name: &str, version: &str) -> PathBuf {
    PathResolver::target_path(install_dir, package_name, version)
}

#[must_use]
pub fn source_glob(install_dir: &Path, package_name: &str, version: &str) -> String {
    PathResolver::source_glob(install_dir, package_name, version)
}
