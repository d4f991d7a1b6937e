use std::collections::HashSet;
use std::path::Path;

use pacchetti_config::{ConfigProvider, package_property};
use pacchetti_error::Result;
use pacchetti_resolver::ResolvedSet;
use pacchetti_store::source_glob;

/// One `<target>/src/**/*.purs` glob per resolved package. Pure path
/// arithmetic: nothing on disk is consulted, so install must have run first.
pub fn collect_source_globs(
    config: &dyn ConfigProvider,
    install_dir: &Path,
    names: &ResolvedSet,
) -> Result<HashSet<String>> {
    names
        .iter()
        .map(|name| -> Result<String> {
            let version = package_property(config, name, "version")?;
            Ok(source_glob(install_dir, name, &version))
        })
        .collect()
}

/// Sorted copy for printing; the build tool itself does not care about order.
#[must_use]
pub fn sorted_globs(globs: &HashSet<String>) -> Vec<String> {
    let mut sorted: Vec<String> = globs.iter().cloned().collect();
    sorted.sort();
    sorted
}
