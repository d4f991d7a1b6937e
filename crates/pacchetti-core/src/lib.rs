pub mod compile;
pub mod fetch;
pub mod install;
pub mod project;
pub mod sources;

#[cfg(test)]
mod test_support;

pub use compile::{BuildTool, PursCompiler};
pub use fetch::{GitFetcher, PackageFetcher};
pub use install::{InstallManager, InstallOutcome, InstallSummary, PackageInstaller};
pub use project::Project;
pub use sources::{collect_source_globs, sorted_globs};

use std::path::Path;
use std::sync::Arc;

use pacchetti_error::{PackageManagerError, Result};

fn install_with(
    project: &Project,
    fetcher: Arc<dyn PackageFetcher>,
    jobs: Option<usize>,
) -> Result<InstallSummary> {
    let names = project.resolve()?;

    pacchetti_logger::info(&format!("Installing {} dependencies.", names.len()));

    let rt = tokio::runtime::Runtime::new().map_err(|e| {
        PackageManagerError::Runtime(format!("Failed to create async runtime: {e}"))
    })?;

    rt.block_on(project.install(&names, fetcher, jobs))
}

pub fn install_deps(project_dir: &str, jobs: Option<usize>, debug: bool) -> anyhow::Result<()> {
    let project = Project::open(Path::new(project_dir), debug)?;
    let summary = install_with(&project, Arc::new(GitFetcher::new(debug)), jobs)?;

    pacchetti_logger::finish(&summary.finish_message());
    Ok(())
}

pub fn list_sources(project_dir: &str, debug: bool) -> anyhow::Result<Vec<String>> {
    let project = Project::open(Path::new(project_dir), debug)?;
    let names = project.resolve()?;
    let globs = project.source_globs(&names)?;

    Ok(sorted_globs(&globs))
}

pub fn build_project(project_dir: &str, debug: bool) -> anyhow::Result<()> {
    let project = Project::open(Path::new(project_dir), debug)?;
    let compiler = PursCompiler::new(project.project_dir(), debug);

    project.build(&compiler)?;

    pacchetti_logger::finish("Build succeeded.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingFetcher;
    use pacchetti_constants::{CONFIG_JSON, INSTALL_DIR};
    use std::fs;

    fn project_dir(registry: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(INSTALL_DIR)).unwrap();
        fs::write(dir.path().join(INSTALL_DIR).join(CONFIG_JSON), registry).unwrap();
        dir
    }

    #[test]
    fn test_one_failed_fetch_fails_the_whole_install() {
        let dir = project_dir(
            r#"{
                "dependencies": ["A", "D"],
                "packages": {
                    "A": { "repo": "git://a", "version": "v1", "dependencies": ["B", "C"] },
                    "B": { "repo": "git://b", "version": "v1", "dependencies": ["C"] },
                    "C": { "repo": "git://c", "version": "v1", "dependencies": [] },
                    "D": { "repo": "git://d", "version": "v1", "dependencies": ["E"] },
                    "E": { "repo": "git://e", "version": "v1", "dependencies": ["D"] }
                }
            }"#,
        );
        let project = Project::open(dir.path(), false).unwrap();
        let fetcher = Arc::new(RecordingFetcher::failing("git://d"));

        let err = install_with(&project, Arc::clone(&fetcher) as Arc<dyn PackageFetcher>, Some(3))
            .unwrap_err();

        assert!(matches!(err, PackageManagerError::FetchFailed(name, _) if name == "D"));
        assert_eq!(
            fetcher.fetched_repos(),
            vec!["git://a", "git://b", "git://c", "git://d", "git://e"]
        );
    }

    #[test]
    fn test_list_sources_is_sorted() {
        let dir = project_dir(
            r#"{
                "dependencies": ["b"],
                "packages": {
                    "a": { "repo": "git://a", "version": "v2", "dependencies": [] },
                    "b": { "repo": "git://b", "version": "v1", "dependencies": ["a"] }
                }
            }"#,
        );

        let globs = list_sources(dir.path().to_str().unwrap(), false).unwrap();

        assert_eq!(globs.len(), 2);
        assert!(globs[0].ends_with("/a/v2/src/**/*.purs"));
        assert!(globs[1].ends_with("/b/v1/src/**/*.purs"));
    }

    #[test]
    fn test_missing_registry_and_generator_fails() {
        let dir = tempfile::tempdir().unwrap();
        // No spacchetti.json and, in a bare temp dir, no spacchetti.dhall either.
        assert!(list_sources(dir.path().to_str().unwrap(), false).is_err());
    }
}
