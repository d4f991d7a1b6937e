use anyhow::{Context, bail};
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

use pacchetti_constants::GIT;

/// Materializes `repo` at exactly `version` into `dest`.
///
/// Implementations must leave `dest` absent when they fail, so that a later
/// run can retry without cleaning up.
pub trait PackageFetcher: Send + Sync {
    fn fetch(&self, repo: &str, version: &str, dest: &Path) -> anyhow::Result<()>;
}

pub struct GitFetcher {
    debug: bool,
}

impl GitFetcher {
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }

    fn clone_into(&self, repo: &str, version: &str, checkout: &Path) -> anyhow::Result<()> {
        if self.debug {
            pacchetti_logger::shell(&format!(
                "git clone -c advice.detachedHead=false --branch {version} {repo} {}",
                checkout.display()
            ));
        }

        let output = Command::new(GIT)
            .args(["clone", "--quiet", "-c", "advice.detachedHead=false"])
            .args(["--branch", version, "--", repo])
            .arg(checkout)
            .stdin(Stdio::null())
            .output()
            .context("cannot run git")?;

        if !output.status.success() {
            bail!(
                "git clone exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(())
    }
}

impl Default for GitFetcher {
    fn default() -> Self {
        Self::new(false)
    }
}

impl PackageFetcher for GitFetcher {
    fn fetch(&self, repo: &str, version: &str, dest: &Path) -> anyhow::Result<()> {
        let parent = dest
            .parent()
            .with_context(|| format!("{} has no parent directory", dest.display()))?;
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;

        // Clone next to the target and move it in whole; the staging dir is
        // removed on drop whatever happens.
        let staging = tempfile::Builder::new()
            .prefix(".fetch-")
            .tempdir_in(parent)
            .with_context(|| format!("cannot create staging dir in {}", parent.display()))?;
        let checkout = staging.path().join("checkout");

        self.clone_into(repo, version, &checkout)?;

        if dest.is_dir() {
            // Another process finished the same (name, version) first.
            return Ok(());
        }

        fs::rename(&checkout, dest)
            .with_context(|| format!("cannot move checkout into {}", dest.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git_available() -> bool {
        Command::new(GIT)
            .arg("--version")
            .stdout(Stdio::null())
            .status()
            .is_ok_and(|status| status.success())
    }

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new(GIT)
            .args(["-c", "user.name=pacchetti", "-c", "user.email=pacchetti@example.com"])
            .args(args)
            .current_dir(dir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .unwrap();
        assert!(status.success(), "git {args:?} failed");
    }

    fn tagged_repo(root: &Path) -> std::path::PathBuf {
        let repo = root.join("origin");
        fs::create_dir_all(repo.join("src")).unwrap();
        fs::write(repo.join("src").join("Main.purs"), "module Main where\n").unwrap();
        git(&repo, &["init", "--quiet"]);
        git(&repo, &["add", "."]);
        git(&repo, &["commit", "--quiet", "-m", "init"]);
        git(&repo, &["tag", "v1.0.0"]);
        repo
    }

    #[test]
    fn test_fetch_pinned_tag() {
        if !git_available() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let repo = tagged_repo(dir.path());
        let dest = dir.path().join(".spacchetti").join("main").join("v1.0.0");

        GitFetcher::default()
            .fetch(repo.to_str().unwrap(), "v1.0.0", &dest)
            .unwrap();

        assert!(dest.join("src").join("Main.purs").is_file());
        let leftovers: Vec<_> = fs::read_dir(dest.parent().unwrap())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().starts_with(".fetch-"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_unknown_version_leaves_no_target() {
        let dir = tempfile::tempdir().unwrap();
        let repo = if git_available() {
            tagged_repo(dir.path())
        } else {
            dir.path().join("origin")
        };
        let dest = dir.path().join(".spacchetti").join("main").join("v9.9.9");

        let result = GitFetcher::default().fetch(repo.to_str().unwrap(), "v9.9.9", &dest);

        assert!(result.is_err());
        assert!(!dest.exists());
    }

    #[test]
    fn test_missing_repo_fails() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("pkg").join("v1.0.0");

        let result = GitFetcher::default().fetch(
            dir.path().join("nowhere").to_str().unwrap(),
            "v1.0.0",
            &dest,
        );

        assert!(result.is_err());
        assert!(!dest.exists());
    }
}
